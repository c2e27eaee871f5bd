pub mod components;
pub mod config;
pub mod game;
pub mod game_loop;
pub mod math;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use game_loop::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation
pub fn step(
    world: &mut World,
    config: &Config,
    input: &mut InputState,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Human paddle follows pointer/keys
    apply_player_input(world, input, config);

    // 2. Computer paddle chases the ball
    track_ball(world, config);

    // 3. Move ball
    move_ball(world);

    // 4. Check collisions (walls, then left paddle, then right paddle)
    check_collisions(world, config, events);

    // 5. Check scoring (ball exited playfield)
    check_scoring(world, config, score, events, rng);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
