use brickbreak::Tuning;
use brickbreak::sim::{
    Ball, GameEvent, GamePhase, GameState, Item, ItemKind, Rect, TickInput, tick,
};
use glam::Vec2;

fn started(tuning: Tuning) -> GameState {
    let mut state = GameState::new(tuning, 2024).expect("valid tuning");
    let snap = tick(
        &mut state,
        &TickInput {
            start: true,
            ..Default::default()
        },
    );
    assert_eq!(snap.status.phase, GamePhase::Playing);
    state
}

fn idle() -> TickInput {
    TickInput::default()
}

/// Ball that will be at `at` after one tick of movement
fn arriving(at: Vec2, vel: Vec2, radius: f32) -> Ball {
    Ball {
        pos: at - vel,
        vel,
        radius,
        speed: vel.length(),
    }
}

#[test]
fn center_paddle_hit_bounces_straight_up() {
    let mut state = started(Tuning::default());
    assert_eq!(state.paddle.width, 120.0);
    let paddle = state.paddle.rect();
    let speed = state.ball_speed;
    state.balls = vec![arriving(
        Vec2::new(paddle.center().x, paddle.top() - 4.0),
        Vec2::new(0.0, speed),
        8.0,
    )];

    tick(&mut state, &idle());
    assert_eq!(state.balls[0].vel, Vec2::new(0.0, -speed));
}

#[test]
fn last_life_lost_ends_game_and_freezes_score() {
    let mut state = started(Tuning::default());
    state.lives = 1;
    state.score = 120;
    let speed = state.ball_speed;
    state.balls = vec![arriving(Vec2::new(50.0, 599.0), Vec2::new(0.0, speed), 8.0)];

    let snap = tick(&mut state, &idle());
    assert_eq!(snap.status.lives, 0);
    assert_eq!(snap.status.phase, GamePhase::GameOver);
    assert_eq!(snap.status.score, 120);
    assert!(state.balls.is_empty());

    // Terminal: start and pause are ignored, nothing moves
    for _ in 0..10 {
        let snap = tick(
            &mut state,
            &TickInput {
                start: true,
                toggle_pause: true,
                ..Default::default()
            },
        );
        assert_eq!(snap.status.phase, GamePhase::GameOver);
        assert_eq!(snap.status.score, 120);
    }
}

#[test]
fn losing_last_ball_with_lives_left_serves_one_ball() {
    let mut state = started(Tuning::default());
    let speed = state.ball_speed;
    state.balls = vec![arriving(Vec2::new(700.0, 599.0), Vec2::new(0.0, speed), 8.0)];

    tick(&mut state, &idle());
    assert_eq!(state.lives, 2);
    assert_eq!(state.phase, GamePhase::Waiting);
    assert_eq!(state.balls.len(), 1);
    assert!(state.events.contains(&GameEvent::LifeLost { lives: 2 }));
}

#[test]
fn multi_ball_at_cap_is_skipped() {
    let mut state = started(Tuning::default());
    let speed = state.ball_speed;
    state.balls = (0..5)
        .map(|i| arriving(Vec2::new(200.0 + i as f32 * 60.0, 320.0), Vec2::new(0.0, -speed), 8.0))
        .collect();
    let paddle = state.paddle.rect();
    state.items.push(Item {
        rect: Rect::new(paddle.center().x - 15.0, paddle.top() - 10.0, 30.0, 15.0),
        kind: ItemKind::MultiBall,
        fall_speed: 2.0,
        active: true,
    });

    tick(&mut state, &idle());
    assert_eq!(state.balls.len(), 5);
    assert!(state.items.is_empty());
    assert!(state.events.contains(&GameEvent::MultiBallSkipped));
    assert_eq!(state.phase, GamePhase::Playing);
}

#[test]
fn obstacle_cell_survives_repeated_hits() {
    let tuning = Tuning {
        levels: vec![vec![vec![1, 0, 2]]],
        ..Default::default()
    };
    let mut state = started(tuning);
    assert_eq!(state.obstacles.len(), 1);
    let expected = Rect::new(25.0 + 2.0 * 53.0, 60.0, 50.0, 20.0);
    assert_eq!(state.obstacles[0].rect, expected);

    for _ in 0..50 {
        state.balls = vec![arriving(expected.center(), Vec2::new(0.0, -8.0), 8.0)];
        tick(&mut state, &idle());
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.balls[0].vel.y > 0.0);
    }
    assert_eq!(state.obstacles.len(), 1);
    assert_eq!(state.obstacles[0].rect, expected);
    assert_eq!(state.score, 0);
    assert_eq!(state.visible_bricks(), 1);
}

#[test]
fn clearing_level_wins_then_advances() {
    let tuning = Tuning {
        levels: vec![vec![vec![1]], vec![vec![1, 1]]],
        ..Default::default()
    };
    let mut state = started(tuning);
    let brick = state.bricks[0].rect;
    let speed = state.ball_speed;
    state.balls = vec![arriving(
        Vec2::new(brick.center().x, brick.bottom() + 4.0),
        Vec2::new(speed, -speed),
        8.0,
    )];

    let snap = tick(&mut state, &idle());
    assert_eq!(snap.status.phase, GamePhase::GameWin);
    assert_eq!(snap.status.score, 80);
    assert!(snap.render.bricks.is_empty());

    // Frozen until the player moves on
    let frozen = state.balls.clone();
    tick(&mut state, &idle());
    assert_eq!(state.balls, frozen);

    let snap = tick(
        &mut state,
        &TickInput {
            advance_level: true,
            ..Default::default()
        },
    );
    assert_eq!(snap.status.phase, GamePhase::Waiting);
    assert_eq!(snap.status.level, 2);
    assert_eq!(snap.status.score, 80);
    assert_eq!(snap.render.bricks.len(), 2);
    // Served at the faster per-axis speed, still heading right
    assert_eq!(state.balls[0].vel, Vec2::new(10.0, -10.0));

    // Level 3 wraps back to the first pattern
    state.bricks.iter_mut().for_each(|b| b.visible = false);
    state.phase = GamePhase::GameWin;
    let snap = tick(
        &mut state,
        &TickInput {
            advance_level: true,
            ..Default::default()
        },
    );
    assert_eq!(snap.status.level, 3);
    assert_eq!(snap.render.bricks.len(), 1);
}

#[test]
fn pause_freezes_everything_but_status() {
    let mut state = started(Tuning::default());
    state.items.push(Item {
        rect: Rect::new(100.0, 300.0, 30.0, 15.0),
        kind: ItemKind::GrowBall,
        fall_speed: 2.0,
        active: true,
    });
    let pause = TickInput {
        toggle_pause: true,
        ..Default::default()
    };
    tick(&mut state, &pause);
    assert_eq!(state.phase, GamePhase::Paused);

    let balls = state.balls.clone();
    let items = state.items.clone();
    let paddle = state.paddle.clone();
    let snap = tick(
        &mut state,
        &TickInput {
            right: true,
            ..Default::default()
        },
    );
    assert_eq!(snap.status.phase, GamePhase::Paused);
    assert_eq!(state.balls, balls);
    assert_eq!(state.items, items);
    assert_eq!(state.paddle, paddle);
}

#[test]
fn snapshot_exposes_item_labels() {
    let mut state = started(Tuning::default());
    state.items.push(Item {
        rect: Rect::new(100.0, 300.0, 30.0, 15.0),
        kind: ItemKind::ShrinkPaddle,
        fall_speed: 2.0,
        active: true,
    });
    let snap = tick(&mut state, &idle());
    assert_eq!(snap.render.items.len(), 1);
    assert_eq!(snap.render.items[0].label, "P-");
    assert_eq!(snap.render.items[0].color.hex(), "#96ceb4");
    assert_eq!(snap.render.items[0].rect.top(), 302.0);
}
