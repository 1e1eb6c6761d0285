//! Confetti burst effect.
//!
//! A purely decorative particle system triggered when a task is completed.
//! Particles are spawned at a screen-space origin with randomized
//! velocities, then integrated with a fixed timestep (one tick per render
//! frame): gravity pulls them down while their opacity fades until they
//! expire. The effect consumes only a trigger and an origin - it knows
//! nothing about task data.

use ratatui::{buffer::Buffer, layout::Rect, style::Color};

/// Number of particles spawned per burst.
const PARTICLES_PER_BURST: usize = 50;

/// Downward acceleration per tick, in cells.
const GRAVITY: f32 = 0.12;

/// Palette cycled through by spawned particles.
const CONFETTI_COLORS: [Color; 6] = [
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Red,
    Color::Magenta,
    Color::Cyan,
];

#[derive(Debug, Clone)]
struct Particle {
    x: f32,
    y: f32,
    velocity_x: f32,
    velocity_y: f32,
    opacity: f32,
    decay: f32,
    color: Color,
}

/// A fixed-timestep confetti particle system.
///
/// # Examples
///
/// ```
/// use taskdeck_tui::widgets::ConfettiSystem;
///
/// let mut confetti = ConfettiSystem::new();
/// assert!(!confetti.is_active());
///
/// confetti.burst(40.0, 12.0);
/// assert!(confetti.is_active());
///
/// confetti.tick();
/// ```
#[derive(Debug)]
pub struct ConfettiSystem {
    particles: Vec<Particle>,
    rng: u64,
}

impl ConfettiSystem {
    /// Creates an idle system seeded from the wall clock.
    #[must_use]
    pub fn new() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0x9E37_79B9_7F4A_7C15, |d| d.as_nanos() as u64);
        Self::with_seed(seed)
    }

    /// Creates an idle system with a fixed seed, for reproducible runs.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            // xorshift needs a non-zero state
            rng: seed | 1,
        }
    }

    /// Spawns a burst of particles at the given screen-space origin
    /// (in cell coordinates).
    pub fn burst(&mut self, x: f32, y: f32) {
        for i in 0..PARTICLES_PER_BURST {
            // Terminal cells are roughly twice as tall as wide, so spread
            // horizontal velocity wider to keep the burst round-ish.
            let velocity_x = (self.next_f32() - 0.5) * 4.5;
            let velocity_y = -(self.next_f32() * 1.8 + 0.6);
            let decay = 0.03 + self.next_f32() * 0.025;
            self.particles.push(Particle {
                x,
                y,
                velocity_x,
                velocity_y,
                opacity: 1.0,
                decay,
                color: CONFETTI_COLORS[i % CONFETTI_COLORS.len()],
            });
        }
    }

    /// Advances the simulation by one frame.
    ///
    /// Euler integration: gravity accelerates, velocity moves, opacity
    /// fades; expired particles are dropped.
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            p.velocity_y += GRAVITY;
            p.x += p.velocity_x;
            p.y += p.velocity_y;
            p.opacity -= p.decay;
        }
        self.particles.retain(|p| p.opacity > 0.0);
    }

    /// Returns `true` while any particle is alive.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    /// Returns the number of live particles.
    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// xorshift64* step returning a float in `[0, 1)`.
    fn next_f32(&mut self) -> f32 {
        let mut x = self.rng;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.rng = x;
        let bits = (x.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 40) as u32;
        bits as f32 / (1u32 << 24) as f32
    }
}

impl Default for ConfettiSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the live particles on top of the given area.
///
/// Particles outside the area are skipped; glyph weight tracks the
/// remaining opacity.
pub fn render_confetti(system: &ConfettiSystem, area: Rect, buf: &mut Buffer) {
    for p in &system.particles {
        if p.x < 0.0 || p.y < 0.0 {
            continue;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (x, y) = (p.x as u16, p.y as u16);
        if !area.contains((x, y).into()) {
            continue;
        }

        let glyph = if p.opacity >= 0.66 {
            "■"
        } else if p.opacity >= 0.33 {
            "▪"
        } else {
            "·"
        };

        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol(glyph);
            cell.set_fg(p.color);
        }
    }
}
