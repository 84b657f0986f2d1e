use anyhow::Context;
use clash2d::{Body, BodyId, ControlInput, PhysicsConfig, PhysicsWorld};
use glam::Vec2;

const DEFAULT_FRAMES: u32 = 600;
const ARENA: f32 = 640.0;

/// Walled arena with one of each body kind and a player-driven ball.
fn build_scene(world: &mut PhysicsWorld) -> anyhow::Result<BodyId> {
    // Arena walls
    let corners = [
        Vec2::new(0.0, 0.0),
        Vec2::new(ARENA, 0.0),
        Vec2::new(ARENA, ARENA),
        Vec2::new(0.0, ARENA),
    ];
    for i in 0..corners.len() {
        world.add_body(Body::new_wall(corners[i], corners[(i + 1) % corners.len()]));
    }

    let player = world.add_body(Body::new_ball(Vec2::new(100.0, 100.0), 20.0, 4.0));
    world.set_player(player, true)?;

    world.add_body(
        Body::new_ball(Vec2::new(320.0, 120.0), 30.0, 8.0)
            .with_velocity(Vec2::new(-1.5, 0.5))
            .with_elasticity(0.8),
    );
    world.add_body(
        Body::new_box(Vec2::new(200.0, 300.0), Vec2::new(260.0, 300.0), 40.0, 6.0)
            .with_angular_velocity(0.02),
    );
    world.add_body(
        Body::new_capsule(Vec2::new(400.0, 400.0), Vec2::new(480.0, 430.0), 15.0, 5.0)
            .with_velocity(Vec2::new(-1.0, -1.0)),
    );
    world.add_body(
        Body::new_star(Vec2::new(500.0, 200.0), 35.0, 3.0)
            .with_velocity(Vec2::new(0.0, 2.0))
            .with_angular_velocity(-0.05),
    );
    // Immovable obstacle in the middle of the arena
    world.add_body(Body::new_ball(Vec2::new(320.0, 320.0), 25.0, 0.0));

    Ok(player)
}

/// Deterministic input script: steer right, then up, then coast.
fn scripted_input(frame: u32) -> ControlInput {
    match frame % 240 {
        0..=59 => ControlInput::right(),
        60..=89 => ControlInput::up().with(ControlInput::right()),
        90..=119 => ControlInput::down(),
        _ => ControlInput::NONE,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let frames = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u32>()
            .with_context(|| format!("invalid frame count: {arg}"))?,
        None => DEFAULT_FRAMES,
    };

    let config = PhysicsConfig {
        linear_damping: 0.01,
        ..Default::default()
    };
    let mut world = PhysicsWorld::new(config);
    let player = build_scene(&mut world)?;

    log::info!(
        "Simulating {} bodies for {} frames (player: {})",
        world.len(),
        frames,
        player
    );

    let mut total_contacts = 0usize;
    for frame in 0..frames {
        world.step(scripted_input(frame));
        total_contacts += world.contacts().len();

        if frame % 60 == 0 {
            log::info!(
                "frame {:>5}: {} contacts, momentum = {:?}, energy = {:.3}",
                frame,
                world.contacts().len(),
                world.total_momentum(),
                world.kinetic_energy()
            );
        }
    }

    for (i, body) in world.bodies().iter().enumerate() {
        log::info!(
            "{} {:?}: position = {:?}, angle = {:.3}, velocity = {:?}",
            BodyId(i),
            body.kind,
            body.position(),
            body.angle(),
            body.linear_velocity
        );
    }
    log::info!("{} contacts resolved over {} frames", total_contacts, frames);

    Ok(())
}
