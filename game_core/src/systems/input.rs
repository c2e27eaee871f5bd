use crate::{Config, InputState, Paddle, Side};
use hecs::World;

/// Apply the frame's input to the human paddle.
///
/// A pending pointer position sets an absolute target (paddle centered on
/// it), then held keys nudge the paddle by its speed. Always clamped.
pub fn apply_player_input(world: &mut World, input: &mut InputState, config: &Config) {
    let pointer = input.take_pointer();
    let key_dir = input.key_dir();

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Left {
            continue;
        }

        if let Some(target) = pointer {
            paddle.y = config.clamp_paddle_y(target - config.paddle_height / 2.0);
        }

        if key_dir != 0 {
            paddle.y += key_dir as f32 * config.paddle_speed(Side::Left);
        }

        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, InputKey};

    fn player_y(world: &World) -> f32 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == Side::Left)
            .map(|(_e, p)| p.y)
            .unwrap()
    }

    #[test]
    fn test_pointer_centers_paddle() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Left, 0.0);
        let mut input = InputState::new();
        input.set_pointer(250.0);

        apply_player_input(&mut world, &mut input, &config);

        assert_eq!(player_y(&world), 250.0 - config.paddle_height / 2.0);
    }

    #[test]
    fn test_pointer_out_of_range_is_clamped() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Left, 100.0);
        let mut input = InputState::new();

        input.set_pointer(-400.0);
        apply_player_input(&mut world, &mut input, &config);
        assert_eq!(player_y(&world), 0.0);

        input.set_pointer(10_000.0);
        apply_player_input(&mut world, &mut input, &config);
        assert_eq!(player_y(&world), config.max_paddle_y());
    }

    #[test]
    fn test_held_down_moves_by_speed() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Left, 100.0);
        let mut input = InputState::new();
        input.press(InputKey::Down);

        apply_player_input(&mut world, &mut input, &config);
        apply_player_input(&mut world, &mut input, &config);

        assert_eq!(player_y(&world), 100.0 + 2.0 * config.player_speed);
    }

    #[test]
    fn test_held_up_at_top_stays_at_zero() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Left, 0.0);
        let mut input = InputState::new();
        input.press(InputKey::Up);

        for _ in 0..30 {
            apply_player_input(&mut world, &mut input, &config);
            assert_eq!(player_y(&world), 0.0);
        }
    }

    #[test]
    fn test_input_ignores_opponent_paddle() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Right, 100.0);
        let mut input = InputState::new();
        input.set_pointer(400.0);
        input.press(InputKey::Down);

        apply_player_input(&mut world, &mut input, &config);

        for (_e, paddle) in world.query::<&Paddle>().iter() {
            assert_eq!(paddle.y, 100.0);
        }
    }
}
