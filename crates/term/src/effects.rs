//! Effect system - particle and smoke bursts for cleared rows.
//!
//! Purely presentational: the system consumes `RowCleared` cues and owns a
//! pool of short-lived sprites in board-cell coordinates. It never reads
//! or writes engine state, and dropping every effect mid-flight changes
//! nothing about the game.
//!
//! Velocities are in cells per second and lifetimes decay per second, so
//! the animation speed is independent of the frame rate.

use blockfall_core::SimpleRng;
use blockfall_types::{ShapeId, BOARD_WIDTH};

use crate::fb::Rgb;
use crate::view::shape_color;

/// Colored spark flying out of a cleared row.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    vx: f32,
    vy: f32,
    /// Remaining life in [0, 1]; drawn brightness follows it.
    pub life: f32,
    decay: f32,
    pub color: Rgb,
}

/// Grey puff rising from a cleared row.
#[derive(Debug, Clone, Copy)]
pub struct Smoke {
    pub x: f32,
    pub y: f32,
    vx: f32,
    vy: f32,
    pub life: f32,
    decay: f32,
    /// Grows while it lives; picks the glyph.
    pub size: f32,
}

/// Particles per cleared row.
const PARTICLES_PER_BURST: usize = 28;

/// Smoke puffs per cleared row.
const SMOKE_PER_BURST: usize = 10;

/// Particle pool driven by cleared-row cues.
#[derive(Debug, Clone)]
pub struct EffectSystem {
    particles: Vec<Particle>,
    smokes: Vec<Smoke>,
    rng: SimpleRng,
}

impl EffectSystem {
    pub fn new(seed: u32) -> Self {
        Self {
            particles: Vec::new(),
            smokes: Vec::new(),
            rng: SimpleRng::new(seed),
        }
    }

    /// Emit one burst across the full width of the given row.
    pub fn spawn_burst(&mut self, row: u8) {
        let cy = row as f32 + 0.5;

        for _ in 0..PARTICLES_PER_BURST {
            let color_id = ShapeId::ALL[self.rng.next_range(7) as usize];
            self.particles.push(Particle {
                x: self.rng.next_unit() * BOARD_WIDTH as f32,
                y: cy,
                vx: self.rng.next_unit() * 12.0 - 6.0,
                vy: self.rng.next_unit() * 12.0 - 6.0,
                life: 1.0,
                decay: self.rng.next_unit() * 1.2 + 1.2,
                color: shape_color(color_id),
            });
        }

        for _ in 0..SMOKE_PER_BURST {
            self.smokes.push(Smoke {
                x: self.rng.next_unit() * BOARD_WIDTH as f32,
                y: cy,
                vx: self.rng.next_unit() * 4.0 - 2.0,
                vy: -(self.rng.next_unit() * 2.0 + 2.0),
                life: 1.0,
                decay: self.rng.next_unit() * 1.8 + 0.6,
                size: self.rng.next_unit() * 0.7 + 0.4,
            });
        }
    }

    /// Advance all live effects by `delta_ms`, discarding dead ones.
    pub fn update(&mut self, delta_ms: u32) {
        let dt = delta_ms as f32 / 1000.0;

        self.particles.retain_mut(|p| {
            p.x += p.vx * dt;
            p.y += p.vy * dt;
            p.life -= p.decay * dt;
            p.life > 0.0
        });

        self.smokes.retain_mut(|s| {
            s.x += s.vx * dt;
            s.y += s.vy * dt;
            s.life -= s.decay * dt;
            s.size *= 1.0 + 1.2 * dt;
            s.life > 0.0
        });
    }

    pub fn is_idle(&self) -> bool {
        self.particles.is_empty() && self.smokes.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn smokes(&self) -> &[Smoke] {
        &self.smokes
    }
}
