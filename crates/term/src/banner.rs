//! ScoreBanner: the terminal's score read-out.
//!
//! Plays the role of the score text element next to the playfield: it only
//! re-formats when the score actually changes, and the view draws whatever
//! text it currently holds.

use blockfall_core::ScoreSink;

#[derive(Debug, Clone)]
pub struct ScoreBanner {
    text: String,
}

impl ScoreBanner {
    pub fn new() -> Self {
        Self {
            text: String::from("Score: 0"),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Default for ScoreBanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreSink for ScoreBanner {
    fn on_score_changed(&mut self, value: u32) {
        self.text = format!("Score: {}", value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_text() {
        assert_eq!(ScoreBanner::new().text(), "Score: 0");
    }

    #[test]
    fn test_tracks_score_changes() {
        let mut banner = ScoreBanner::new();
        banner.on_score_changed(100);
        assert_eq!(banner.text(), "Score: 100");
        banner.on_score_changed(0);
        assert_eq!(banner.text(), "Score: 0");
    }
}
