use super::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn seeded(seed: u64) -> impl FnMut() -> f64 {
    let mut rng = StdRng::seed_from_u64(seed);
    move || rng.random::<f64>()
}

// =============================================================
// Schedule
// =============================================================

#[test]
fn burst_size_decays_linearly_with_time_left() {
    let schedule = ConfettiSchedule::default();
    assert_eq!(schedule.burst_size(0.0), Some(50));
    assert_eq!(schedule.burst_size(1500.0), Some(25));
    assert_eq!(schedule.burst_size(2750.0), Some(4));
    assert_eq!(schedule.burst_size(2999.0), Some(0));
}

#[test]
fn burst_size_none_once_window_closes() {
    let schedule = ConfettiSchedule::default();
    assert_eq!(schedule.burst_size(3000.0), None);
    assert_eq!(schedule.burst_size(10_000.0), None);
}

#[test]
fn burst_origins_stay_in_side_ranges() {
    let mut sampler = seeded(3);
    for _ in 0..500 {
        let [left, right] = burst_origins(&mut sampler);
        assert!((0.1..0.3).contains(&left.x));
        assert!((0.7..0.9).contains(&right.x));
        assert!((-0.2..0.8).contains(&left.y));
        assert!((-0.2..0.8).contains(&right.y));
    }
}

// =============================================================
// Run
// =============================================================

#[test]
fn run_waits_one_interval_before_first_burst() {
    let mut sampler = seeded(1);
    let mut run = ConfettiRun::default();
    run.tick(249.0, 800.0, 600.0, &mut sampler);
    assert!(run.particles().is_empty());

    run.tick(250.0, 800.0, 600.0, &mut sampler);
    // Two bursts of floor(50 * 2750 / 3000) = 45.
    assert_eq!(run.particles().len(), 90);
}

#[test]
fn run_catches_up_on_missed_bursts() {
    let mut sampler = seeded(1);
    let mut run = ConfettiRun::default();
    run.tick(750.0, 800.0, 600.0, &mut sampler);
    // Rounds at 250, 500 and 750 ms: 2 * (45 + 41 + 37).
    assert_eq!(run.particles().len(), 246);
}

#[test]
fn run_stops_bursting_after_window() {
    let mut sampler = seeded(9);
    let mut run = ConfettiRun::default();
    let mut elapsed = 0.0;
    while elapsed < 3000.0 {
        elapsed += 16.0;
        run.tick(elapsed, 800.0, 600.0, &mut sampler);
    }
    assert!(!run.is_finished(elapsed - 1.0));

    for _ in 0..BurstOptions::default().ticks {
        elapsed += 16.0;
        run.tick(elapsed, 800.0, 600.0, &mut sampler);
    }
    assert!(run.particles().is_empty());
    assert!(run.is_finished(elapsed));
}

#[test]
fn spawn_burst_cycles_palette() {
    let mut sampler = seeded(5);
    let mut run = ConfettiRun::default();
    run.spawn_burst(7, Origin { x: 0.5, y: 0.5 }, 100.0, 100.0, &mut sampler);
    let colors = run.particles().iter().map(|p| p.color).collect::<Vec<_>>();
    assert_eq!(colors[..5], CONFETTI_COLORS);
    assert_eq!(colors[5], CONFETTI_COLORS[0]);
    assert_eq!(colors[6], CONFETTI_COLORS[1]);
    assert!(run.particles().iter().all(|p| p.x == 50.0 && p.y == 50.0));
}

// =============================================================
// Particle
// =============================================================

#[test]
fn particle_expires_after_tick_budget() {
    let mut sampler = seeded(11);
    let options = BurstOptions { ticks: 3, ..BurstOptions::default() };
    let mut particle = Particle::launch(0.0, 0.0, CONFETTI_COLORS[0], &options, &mut sampler);
    assert!(particle.step(&mut sampler));
    assert!(particle.step(&mut sampler));
    assert!(!particle.step(&mut sampler));
    assert_eq!(particle.opacity(), 0.0);
}

#[test]
fn particle_fades_and_falls() {
    let mut sampler = seeded(12);
    let options = BurstOptions::default();
    let mut particle = Particle::launch(400.0, 100.0, CONFETTI_COLORS[2], &options, &mut sampler);
    assert_eq!(particle.opacity(), 1.0);

    let mut last_opacity = particle.opacity();
    for _ in 0..30 {
        particle.step(&mut sampler);
        assert!(particle.opacity() < last_opacity);
        last_opacity = particle.opacity();
    }
    // Launch velocity has decayed to nothing; gravity dominates.
    let before = particle.y;
    particle.step(&mut sampler);
    assert!(particle.y > before);
}

#[test]
fn particle_launch_velocity_within_range() {
    let options = BurstOptions::default();
    let slow = Particle::launch(0.0, 0.0, CONFETTI_COLORS[0], &options, &mut || 0.0);
    let fast = Particle::launch(0.0, 0.0, CONFETTI_COLORS[0], &options, &mut || 0.999);
    assert_eq!(slow.velocity, 15.0);
    assert!(fast.velocity > 44.0 && fast.velocity < 45.0);
}

#[test]
fn quad_corners_are_floored() {
    let mut sampler = seeded(4);
    let mut particle = Particle::launch(10.5, 20.5, CONFETTI_COLORS[0], &BurstOptions::default(), &mut sampler);
    particle.step(&mut sampler);
    for (x, y) in particle.quad() {
        assert_eq!(x, x.floor());
        assert_eq!(y, y.floor());
    }
}
