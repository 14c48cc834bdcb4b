use brickbreak::Tuning;
use brickbreak::sim::{GamePhase, GameState, ItemKind, TickInput, apply_item_effect, tick};
use proptest::prelude::*;

/// One frame of player input: 0 idle, 1 left, 2 right, 3 pointer
fn frame_input() -> impl Strategy<Value = TickInput> {
    (0u8..4, 0.0f32..800.0).prop_map(|(code, x)| TickInput {
        left: code == 1,
        right: code == 2,
        pointer_x: (code == 3).then_some(x),
        // Keep re-serving so most frames are spent playing
        start: true,
        ..Default::default()
    })
}

fn item_kind() -> impl Strategy<Value = ItemKind> {
    prop::sample::select(ItemKind::ALL.to_vec())
}

fn lively_tuning() -> Tuning {
    Tuning {
        item_drop_chance: 0.5,
        ..Default::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn paddle_stays_in_field(seed in any::<u64>(), inputs in prop::collection::vec(frame_input(), 1..400)) {
        let mut state = GameState::new(lively_tuning(), seed).expect("valid");
        for input in &inputs {
            tick(&mut state, input);
            let max_x = state.tuning.field_width - state.paddle.width;
            prop_assert!(state.paddle.x >= 0.0 && state.paddle.x <= max_x,
                "paddle x {} outside [0, {}]", state.paddle.x, max_x);
        }
    }

    #[test]
    fn ball_speed_is_conserved(seed in any::<u64>(), inputs in prop::collection::vec(frame_input(), 1..400)) {
        let mut state = GameState::new(lively_tuning(), seed).expect("valid");
        for input in &inputs {
            tick(&mut state, input);
            for ball in &state.balls {
                prop_assert!((ball.vel.length() - ball.speed).abs() < 1e-3 * ball.speed.max(1.0),
                    "|vel| {} != speed {}", ball.vel.length(), ball.speed);
            }
        }
    }

    #[test]
    fn bricks_stay_destroyed_and_score_only_grows(seed in any::<u64>(), inputs in prop::collection::vec(frame_input(), 1..600)) {
        let mut state = GameState::new(lively_tuning(), seed).expect("valid");
        let mut destroyed = vec![false; state.bricks.len()];
        let mut score = state.score;
        for input in &inputs {
            tick(&mut state, input);
            prop_assert!(state.score >= score);
            score = state.score;
            for (seen, brick) in destroyed.iter_mut().zip(&state.bricks) {
                prop_assert!(!(*seen && brick.visible), "brick reappeared");
                *seen |= !brick.visible;
            }
            if state.phase == GamePhase::GameWin || state.phase == GamePhase::GameOver {
                break;
            }
        }
    }

    #[test]
    fn empty_ball_set_reserves_or_ends(seed in any::<u64>(), inputs in prop::collection::vec(frame_input(), 1..600)) {
        let mut state = GameState::new(lively_tuning(), seed).expect("valid");
        for input in &inputs {
            let lives = state.lives;
            tick(&mut state, input);
            if state.lives < lives {
                if state.lives > 0 {
                    prop_assert_eq!(state.balls.len(), 1);
                    prop_assert_eq!(state.phase, GamePhase::Waiting);
                } else {
                    prop_assert_eq!(state.phase, GamePhase::GameOver);
                }
            }
            prop_assert!(state.balls.len() <= state.tuning.max_balls);
        }
    }

    #[test]
    fn same_seed_same_game(seed in any::<u64>(), inputs in prop::collection::vec(frame_input(), 1..200)) {
        let mut a = GameState::new(lively_tuning(), seed).expect("valid");
        let mut b = GameState::new(lively_tuning(), seed).expect("valid");
        for input in &inputs {
            prop_assert_eq!(tick(&mut a, input), tick(&mut b, input));
        }
    }

    #[test]
    fn item_effects_stay_within_limits(kinds in prop::collection::vec(item_kind(), 0..60)) {
        let mut state = GameState::new(Tuning::default(), 11).expect("valid");
        for kind in kinds {
            apply_item_effect(&mut state, kind);
            let t = &state.tuning;
            prop_assert!(state.balls.len() <= t.max_balls);
            prop_assert!(state.paddle.width >= t.paddle_min_width && state.paddle.width <= t.paddle_max_width);
            prop_assert!(state.paddle.x >= 0.0 && state.paddle.x + state.paddle.width <= t.field_width);
            for ball in &state.balls {
                prop_assert!(ball.radius >= t.ball_min_radius && ball.radius <= t.ball_max_radius);
            }
        }
    }
}
