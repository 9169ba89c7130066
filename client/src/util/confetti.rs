//! Confetti particle system for the "Yes" celebration.
//!
//! DESIGN
//! ======
//! A run lasts `ConfettiSchedule::duration_ms`. Every `interval_ms` it fires
//! two bursts, one from each side of the screen, whose size shrinks linearly
//! with the time left. Particles follow the familiar canvas-confetti flight
//! model: a launch velocity that decays geometrically each tick, constant
//! gravity, a wobble that makes each piece flutter, and an opacity that fades
//! out over the particle's tick budget.
//!
//! Nothing here touches the DOM; `components::confetti_canvas` drives `tick`
//! from a timer and paints `particles()` onto a canvas.

#[cfg(test)]
#[path = "confetti_test.rs"]
mod confetti_test;

use std::f64::consts::PI;

use super::random::{UnitSampler, sample_range};

pub const CONFETTI_COLORS: [&str; 5] = ["#FDA4AF", "#FB7185", "#E11D48", "#FFF8F0", "#FFE4E6"];

/// Horizontal origin ranges (fractions of the canvas width) for the two
/// simultaneous bursts.
pub const LEFT_ORIGIN_X: (f64, f64) = (0.1, 0.3);
pub const RIGHT_ORIGIN_X: (f64, f64) = (0.7, 0.9);

/// Timing of a celebration run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfettiSchedule {
    pub duration_ms: f64,
    pub interval_ms: f64,
    pub max_particles: f64,
}

impl Default for ConfettiSchedule {
    fn default() -> Self {
        Self { duration_ms: 3000.0, interval_ms: 250.0, max_particles: 50.0 }
    }
}

impl ConfettiSchedule {
    /// Particles per burst for a burst fired `elapsed_ms` into the run, or
    /// `None` once the window has closed.
    #[must_use]
    pub fn burst_size(&self, elapsed_ms: f64) -> Option<usize> {
        let time_left = self.duration_ms - elapsed_ms;
        if time_left <= 0.0 || self.duration_ms <= 0.0 {
            return None;
        }
        let count = (self.max_particles * (time_left / self.duration_ms)).floor().max(0.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = count as usize;
        Some(count)
    }
}

/// Launch parameters shared by every particle in a burst.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstOptions {
    pub start_velocity: f64,
    pub spread_deg: f64,
    pub angle_deg: f64,
    pub ticks: u32,
    pub decay: f64,
    pub gravity: f64,
    pub drift: f64,
    pub scalar: f64,
}

impl Default for BurstOptions {
    fn default() -> Self {
        Self {
            start_velocity: 30.0,
            spread_deg: 360.0,
            angle_deg: 90.0,
            ticks: 60,
            decay: 0.9,
            gravity: 1.0,
            drift: 0.0,
            scalar: 1.0,
        }
    }
}

/// Burst origin as fractions of the canvas size. `y` may be negative so
/// pieces can rain in from above the top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

/// Left and right origins for one round of bursts.
pub fn burst_origins<S: UnitSampler + ?Sized>(sampler: &mut S) -> [Origin; 2] {
    let left = Origin {
        x: sample_range(sampler, LEFT_ORIGIN_X.0, LEFT_ORIGIN_X.1),
        y: sampler.sample() - 0.2,
    };
    let right = Origin {
        x: sample_range(sampler, RIGHT_ORIGIN_X.0, RIGHT_ORIGIN_X.1),
        y: sampler.sample() - 0.2,
    };
    [left, right]
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub color: &'static str,
    velocity: f64,
    angle_2d: f64,
    wobble: f64,
    wobble_speed: f64,
    wobble_x: f64,
    wobble_y: f64,
    tilt_angle: f64,
    tilt_sin: f64,
    tilt_cos: f64,
    jitter: f64,
    tick: u32,
    total_ticks: u32,
    decay: f64,
    drift: f64,
    gravity: f64,
    scalar: f64,
}

impl Particle {
    fn launch<S: UnitSampler + ?Sized>(
        x: f64,
        y: f64,
        color: &'static str,
        options: &BurstOptions,
        sampler: &mut S,
    ) -> Self {
        let rad_angle = options.angle_deg.to_radians();
        let rad_spread = options.spread_deg.to_radians();
        Self {
            x,
            y,
            color,
            velocity: (options.start_velocity * 0.5) + (sampler.sample() * options.start_velocity),
            angle_2d: -rad_angle + ((0.5 * rad_spread) - (sampler.sample() * rad_spread)),
            wobble: sampler.sample() * 10.0,
            wobble_speed: (sampler.sample() * 0.1 + 0.05).min(0.11),
            wobble_x: x,
            wobble_y: y,
            tilt_angle: sample_range(sampler, 0.25, 0.75) * PI,
            tilt_sin: 0.0,
            tilt_cos: 0.0,
            jitter: sampler.sample() + 2.0,
            tick: 0,
            total_ticks: options.ticks,
            decay: options.decay,
            drift: options.drift,
            gravity: options.gravity * 3.0,
            scalar: options.scalar,
        }
    }

    /// Advance one animation frame. Returns `false` once the particle has
    /// used up its tick budget.
    pub fn step<S: UnitSampler + ?Sized>(&mut self, sampler: &mut S) -> bool {
        self.x += self.angle_2d.cos() * self.velocity + self.drift;
        self.y += self.angle_2d.sin() * self.velocity + self.gravity;
        self.velocity *= self.decay;
        self.wobble += self.wobble_speed;
        self.wobble_x = self.x + (10.0 * self.scalar * self.wobble.cos());
        self.wobble_y = self.y + (10.0 * self.scalar * self.wobble.sin());
        self.tilt_angle += 0.1;
        self.tilt_sin = self.tilt_angle.sin();
        self.tilt_cos = self.tilt_angle.cos();
        self.jitter = sampler.sample() + 2.0;
        self.tick += 1;
        self.tick < self.total_ticks
    }

    /// Fade-out opacity based on how much of the tick budget is spent.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        if self.total_ticks == 0 {
            return 0.0;
        }
        (1.0 - f64::from(self.tick) / f64::from(self.total_ticks)).clamp(0.0, 1.0)
    }

    /// Corners of the fluttering quad to fill, in canvas pixels.
    #[must_use]
    pub fn quad(&self) -> [(f64, f64); 4] {
        let x1 = self.x + (self.jitter * self.tilt_cos);
        let y1 = self.y + (self.jitter * self.tilt_sin);
        let x2 = self.wobble_x + (self.jitter * self.tilt_cos);
        let y2 = self.wobble_y + (self.jitter * self.tilt_sin);
        [
            (self.x.floor(), self.y.floor()),
            (self.wobble_x.floor(), y1.floor()),
            (x2.floor(), y2.floor()),
            (x1.floor(), self.wobble_y.floor()),
        ]
    }
}

/// One celebration: burst timing plus the live particles.
#[derive(Clone, Debug)]
pub struct ConfettiRun {
    schedule: ConfettiSchedule,
    options: BurstOptions,
    next_burst_ms: f64,
    particles: Vec<Particle>,
}

impl Default for ConfettiRun {
    fn default() -> Self {
        Self::new(ConfettiSchedule::default(), BurstOptions::default())
    }
}

impl ConfettiRun {
    #[must_use]
    pub fn new(schedule: ConfettiSchedule, options: BurstOptions) -> Self {
        // The first round fires one interval in, not at t = 0.
        let next_burst_ms = if schedule.interval_ms > 0.0 { schedule.interval_ms } else { f64::INFINITY };
        Self { schedule, options, next_burst_ms, particles: Vec::new() }
    }

    #[must_use]
    pub fn schedule(&self) -> ConfettiSchedule {
        self.schedule
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Fire every burst due by `elapsed_ms`, then step all live particles.
    pub fn tick<S: UnitSampler + ?Sized>(&mut self, elapsed_ms: f64, width: f64, height: f64, sampler: &mut S) {
        while self.next_burst_ms <= elapsed_ms {
            let fired_at = self.next_burst_ms;
            let Some(count) = self.schedule.burst_size(fired_at) else {
                self.next_burst_ms = f64::INFINITY;
                break;
            };
            self.next_burst_ms += self.schedule.interval_ms;
            for origin in burst_origins(sampler) {
                self.spawn_burst(count, origin, width, height, sampler);
            }
        }
        self.particles.retain_mut(|particle| particle.step(sampler));
    }

    /// Launch `count` particles from `origin`, cycling through the palette.
    pub fn spawn_burst<S: UnitSampler + ?Sized>(
        &mut self,
        count: usize,
        origin: Origin,
        width: f64,
        height: f64,
        sampler: &mut S,
    ) {
        let x = origin.x * width;
        let y = origin.y * height;
        self.particles.reserve(count);
        for i in 0..count {
            let color = CONFETTI_COLORS[i % CONFETTI_COLORS.len()];
            self.particles.push(Particle::launch(x, y, color, &self.options, sampler));
        }
    }

    /// True once the burst window has closed and every particle has faded.
    #[must_use]
    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.schedule.duration_ms && self.particles.is_empty()
    }
}
