use crate::{Ball, Config, Events, GameRng, Score, Side};
use hecs::World;

/// Check if the ball fully left the playfield (scoring).
///
/// The side that scores receives the next serve: the ball restarts at the
/// center heading toward the scorer.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let r = config.ball_radius;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.x + r < 0.0 {
            Side::Right
        } else if ball.pos.x - r > config.width {
            Side::Left
        } else {
            continue;
        };

        score.increment(scorer);
        match scorer {
            Side::Left => events.player_scored = true,
            Side::Right => events.opponent_scored = true,
        }
        log::debug!(
            "{scorer:?} scored ({} - {})",
            score.player,
            score.opponent
        );

        ball.serve(scorer, config, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup_world() -> (World, Config, Score, Events, GameRng) {
        (
            World::new(),
            Config::new(),
            Score::new(),
            Events::new(),
            GameRng::new(12345), // Fixed seed for deterministic tests
        )
    }

    fn ball(world: &World) -> Ball {
        world.query::<&Ball>().iter().next().map(|(_e, b)| *b).unwrap()
    }

    #[test]
    fn test_opponent_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-9.0, 250.0), Vec2::new(-8.0, 0.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.opponent, 1, "Opponent should score");
        assert_eq!(score.player, 0, "Player should not score");
        assert!(events.opponent_scored);
        assert!(!events.player_scored);

        let ball = ball(&world);
        assert_eq!(ball.pos, config.center());
        assert!(ball.vel.x > 0.0, "Served rightward, toward the opponent");
        assert_eq!(ball.speed, config.ball_speed_base);
    }

    #[test]
    fn test_player_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(
            &mut world,
            Vec2::new(config.width + 9.0, 250.0),
            Vec2::new(8.0, 0.0),
        );

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.player, 1);
        assert_eq!(score.opponent, 0);
        assert!(events.player_scored);

        let ball = ball(&world);
        assert_eq!(ball.pos, config.center());
        assert!(ball.vel.x < 0.0, "Served leftward, toward the player");
    }

    #[test]
    fn test_partially_out_ball_does_not_score() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        // Center is past the edge but the trailing edge is still inside
        create_ball(&mut world, Vec2::new(-7.0, 250.0), Vec2::new(-8.0, 0.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score, Score::new());
        assert!(!events.scored());
        assert_eq!(ball(&world).pos, Vec2::new(-7.0, 250.0));
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 250.0), Vec2::new(8.0, 4.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score, Score::new());
        assert!(!events.scored(), "No scoring events");
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::ZERO, Vec2::ZERO);

        for _ in 0..3 {
            for (_e, b) in world.query_mut::<&mut Ball>() {
                b.pos = Vec2::new(config.width + 20.0, 100.0);
            }
            check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);
            events.clear();
        }

        assert_eq!(score.player, 3, "Scores should accumulate");
        assert_eq!(score.opponent, 0);
    }
}
