use common::Rgba8;
use elastic_balls::{Ball, ElasticConfig, NormalMode, Simulation, Vector};
use rand::{rngs::StdRng, SeedableRng};

fn resting_population(seed: u64) -> Simulation {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut sim = Simulation::new(ElasticConfig::default(), &mut rng);
    for ball in &mut sim.balls {
        ball.velocity = Vector::ZERO;
    }
    sim
}

#[test]
fn resting_balls_never_move() {
    let mut sim = resting_population(5);
    let start: Vec<Vector> = sim.balls.iter().map(|b| b.position).collect();

    for _ in 0..50 {
        sim.step();
    }

    let end: Vec<Vector> = sim.balls.iter().map(|b| b.position).collect();
    assert_eq!(start, end);
    assert!(sim.balls.iter().all(|b| b.velocity == Vector::ZERO));
}

#[test]
fn coincident_balls_touch_immediately() {
    let config = ElasticConfig::default();
    let balls = vec![
        Ball::new(Vector::new(400.0, 400.0), Vector::new(1.0, 0.0), 2.0, Rgba8::BLACK),
        Ball::new(Vector::new(400.0, 400.0), Vector::new(0.0, 1.0), 3.0, Rgba8::BLACK),
    ];
    let mut sim = Simulation::with_balls(config, balls);

    assert_eq!(sim.touching_pairs(), vec![(0, 1)]);
    // No normal between identical centres, so velocities are kept
    assert_eq!(sim.resolve_collisions(), 1);
    assert_eq!(sim.balls[0].velocity, Vector::new(1.0, 0.0));
    assert_eq!(sim.balls[1].velocity, Vector::new(0.0, 1.0));
}

#[test]
fn wrapped_coordinates_land_on_the_edges() {
    let config = ElasticConfig::default();
    let mut rng = StdRng::seed_from_u64(21);
    let mut sim = Simulation::new(config.clone(), &mut rng);

    for _ in 0..500 {
        let before: Vec<Vector> = sim.balls.iter().map(|b| b.position).collect();
        sim.step();
        for (old, ball) in before.iter().zip(&sim.balls) {
            let p = ball.position;
            assert!((0.0..=config.width).contains(&p.x));
            assert!((0.0..=config.height).contains(&p.y));
            // Any jump larger than a frame's motion is a wrap
            if (p.x - old.x).abs() > config.max_speed {
                assert!(p.x == 0.0 || p.x == config.width, "{p:?}");
            }
            if (p.y - old.y).abs() > config.max_speed {
                assert!(p.y == 0.0 || p.y == config.height, "{p:?}");
            }
        }
    }
}

/// Regression baseline for the raw-normal formula: dividing by |n|^2 makes
/// it an exact mirror, so every colliding ball keeps its speed.
#[test]
fn collisions_preserve_each_balls_speed() {
    for mode in [NormalMode::Raw, NormalMode::Unit] {
        let config = ElasticConfig {
            normal_mode: mode,
            ..ElasticConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(77);
        let mut sim = Simulation::new(config, &mut rng);
        let energy = sim.kinetic_energy();

        let mut collisions = 0;
        for _ in 0..300 {
            let speeds: Vec<f64> = sim.balls.iter().map(Ball::speed).collect();
            collisions += sim.step();
            for (speed, ball) in speeds.iter().zip(&sim.balls) {
                assert!((speed - ball.speed()).abs() < 1e-9, "{mode:?}");
            }
        }

        assert!(collisions > 0);
        assert!((energy - sim.kinetic_energy()).abs() < 1e-6 * energy.max(1.0));
    }
}

#[test]
fn unit_normal_without_normalizing_inflates_speed() {
    // What the collision would do if the raw normal went straight into
    // Vector::reflect, which assumes unit length
    let velocity = Vector::new(1.0, 0.5);
    let normal = Vector::new(6.0, -2.0);
    let reflected = velocity.reflect(normal);
    assert!(reflected.length() > 10.0 * velocity.length());
}
