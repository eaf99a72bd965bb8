//! Held-key repeater for terminal environments.
//!
//! Terminals deliver key *presses*; release events are optional and OS
//! auto-repeat is unreliable under raw mode. This repeater generates its
//! own repeats for held movement keys: an initial delay, then fixed-rate
//! repeats while the key is held, with a timeout that auto-releases keys
//! in terminals that never report a release.

use arrayvec::ArrayVec;

use blockfall_types::{
    Command, DEFAULT_ARR_MS, DEFAULT_DAS_MS, SOFT_DROP_ARR_MS, SOFT_DROP_DAS_MS,
};

/// Direction for horizontal movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Horizontal {
    Left,
    Right,
    None,
}

impl Horizontal {
    fn command(self) -> Option<Command> {
        match self {
            Horizontal::Left => Some(Command::MoveLeft),
            Horizontal::Right => Some(Command::MoveRight),
            Horizontal::None => None,
        }
    }
}

// Without release events, a short timeout keeps a single tap from turning
// into a sustained "held" state that repeats forever.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks held keys and emits repeat commands per tick.
#[derive(Debug, Clone)]
pub struct KeyRepeater {
    horizontal: Horizontal,
    down_held: bool,
    last_key_time: std::time::Instant,
    horizontal_delay_timer: u32,
    down_delay_timer: u32,
    horizontal_repeat_accumulator: u32,
    down_repeat_accumulator: u32,
    repeat_delay: u32,
    repeat_rate: u32,
    key_release_timeout_ms: u32,
}

impl KeyRepeater {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DAS_MS, DEFAULT_ARR_MS)
    }

    pub fn with_config(repeat_delay: u32, repeat_rate: u32) -> Self {
        Self {
            horizontal: Horizontal::None,
            down_held: false,
            last_key_time: std::time::Instant::now(),
            horizontal_delay_timer: 0,
            down_delay_timer: 0,
            horizontal_repeat_accumulator: 0,
            down_repeat_accumulator: 0,
            repeat_delay,
            repeat_rate,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// Register a command press.
    ///
    /// Returns the command to apply immediately, or `None` when the key is
    /// already held (the repeat machinery owns it from here). Rotation is
    /// never held - it fires once per press.
    pub fn press(&mut self, command: Command) -> Option<Command> {
        match command {
            Command::MoveLeft => {
                self.last_key_time = std::time::Instant::now();
                if self.horizontal == Horizontal::Left {
                    None
                } else {
                    self.horizontal = Horizontal::Left;
                    self.horizontal_delay_timer = 0;
                    self.horizontal_repeat_accumulator = 0;
                    Some(Command::MoveLeft)
                }
            }
            Command::MoveRight => {
                self.last_key_time = std::time::Instant::now();
                if self.horizontal == Horizontal::Right {
                    None
                } else {
                    self.horizontal = Horizontal::Right;
                    self.horizontal_delay_timer = 0;
                    self.horizontal_repeat_accumulator = 0;
                    Some(Command::MoveRight)
                }
            }
            Command::SoftDrop => {
                self.last_key_time = std::time::Instant::now();
                if self.down_held {
                    None
                } else {
                    self.down_held = true;
                    self.down_delay_timer = 0;
                    self.down_repeat_accumulator = 0;
                    Some(Command::SoftDrop)
                }
            }
            Command::RotateCw => Some(Command::RotateCw),
        }
    }

    /// Register a command release (terminals that report releases).
    pub fn release(&mut self, command: Command) {
        match command {
            Command::MoveLeft => {
                if self.horizontal == Horizontal::Left {
                    self.horizontal = Horizontal::None;
                    self.horizontal_delay_timer = 0;
                    self.horizontal_repeat_accumulator = 0;
                }
            }
            Command::MoveRight => {
                if self.horizontal == Horizontal::Right {
                    self.horizontal = Horizontal::None;
                    self.horizontal_delay_timer = 0;
                    self.horizontal_repeat_accumulator = 0;
                }
            }
            Command::SoftDrop => {
                self.down_held = false;
                self.down_delay_timer = 0;
                self.down_repeat_accumulator = 0;
            }
            Command::RotateCw => {}
        }
    }

    /// Advance held-key timers by `elapsed_ms` and collect due repeats.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<Command, 32> {
        let mut commands = ArrayVec::<Command, 32>::new();

        // Auto-release when the terminal never reports releases.
        let since_last_key = self.last_key_time.elapsed().as_millis() as u32;
        if since_last_key > self.key_release_timeout_ms {
            if self.horizontal != Horizontal::None {
                self.horizontal = Horizontal::None;
                self.horizontal_delay_timer = 0;
                self.horizontal_repeat_accumulator = 0;
            }
            if self.down_held {
                self.down_held = false;
                self.down_delay_timer = 0;
                self.down_repeat_accumulator = 0;
            }
        }

        if let Some(command) = self.horizontal.command() {
            let prev_delay = self.horizontal_delay_timer;
            self.horizontal_delay_timer += elapsed_ms;

            if self.horizontal_delay_timer >= self.repeat_delay {
                let excess = if prev_delay < self.repeat_delay {
                    self.horizontal_delay_timer - self.repeat_delay
                } else {
                    elapsed_ms
                };
                self.horizontal_repeat_accumulator += excess;

                while self.horizontal_repeat_accumulator >= self.repeat_rate {
                    let _ = commands.try_push(command);
                    self.horizontal_repeat_accumulator -= self.repeat_rate;
                }
            }
        } else {
            self.horizontal_delay_timer = 0;
            self.horizontal_repeat_accumulator = 0;
        }

        if self.down_held {
            let prev_delay = self.down_delay_timer;
            self.down_delay_timer += elapsed_ms;

            if self.down_delay_timer >= SOFT_DROP_DAS_MS {
                let excess = if prev_delay < SOFT_DROP_DAS_MS {
                    self.down_delay_timer - SOFT_DROP_DAS_MS
                } else {
                    elapsed_ms
                };
                self.down_repeat_accumulator += excess;
                while self.down_repeat_accumulator >= SOFT_DROP_ARR_MS {
                    let _ = commands.try_push(Command::SoftDrop);
                    self.down_repeat_accumulator -= SOFT_DROP_ARR_MS;
                }
            }
        } else {
            self.down_delay_timer = 0;
            self.down_repeat_accumulator = 0;
        }

        commands
    }

    pub fn reset(&mut self) {
        self.horizontal = Horizontal::None;
        self.down_held = false;
        self.last_key_time = std::time::Instant::now();
        self.horizontal_delay_timer = 0;
        self.down_delay_timer = 0;
        self.horizontal_repeat_accumulator = 0;
        self.down_repeat_accumulator = 0;
    }
}

impl Default for KeyRepeater {
    fn default() -> Self {
        Self::new()
    }
}
