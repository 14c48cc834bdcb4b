//! Fixed-step simulation tick
//!
//! Core game loop that advances simulation deterministically. Stages run in
//! a fixed order: signals, paddle, balls, bricks/obstacles, items. Once a
//! stage moves the game out of `Playing`, the remaining stages are skipped.

use glam::Vec2;

use super::collision::{self, Rect, circle_overlaps_rect};
use super::snapshot::Snapshot;
use super::state::{Ball, GameEvent, GamePhase, GameState, Item, ItemKind, Paddle};

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Move-left held
    pub left: bool,
    /// Move-right held
    pub right: bool,
    /// Absolute pointer/touch x, if the pointer is tracking
    pub pointer_x: Option<f32>,
    /// Serve the waiting ball
    pub start: bool,
    /// Pause/unpause
    pub toggle_pause: bool,
    /// Restart the session from level 1
    pub reset: bool,
    /// Move on after clearing a level
    pub advance_level: bool,
}

/// Advance the game state by one tick and return what to draw
pub fn tick(state: &mut GameState, input: &TickInput) -> Snapshot {
    state.events.clear();

    if input.reset {
        reset(state);
    }
    if input.advance_level {
        advance_level(state);
    }
    if input.start {
        start(state);
    }
    if input.toggle_pause {
        toggle_pause(state);
    }

    if state.phase == GamePhase::Playing {
        state.time_ticks += 1;

        update_paddle(state, input);
        update_balls(state);
        if state.phase == GamePhase::Playing {
            resolve_collisions(state);
        }
        if state.phase == GamePhase::Playing {
            update_items(state);
        }
    }

    state.snapshot()
}

/// Serve: `Waiting -> Playing`. Returns whether the signal applied.
pub fn start(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Waiting {
        return false;
    }
    state.set_phase(GamePhase::Playing);
    true
}

/// `Playing <-> Paused`; a no-op from any other phase
pub fn toggle_pause(state: &mut GameState) -> bool {
    match state.phase {
        GamePhase::Playing => state.set_phase(GamePhase::Paused),
        GamePhase::Paused => state.set_phase(GamePhase::Playing),
        _ => return false,
    }
    true
}

/// Restart the session at level 1 with fresh score and lives
pub fn reset(state: &mut GameState) -> bool {
    log::info!("Session reset (final score {})", state.score);
    state.score = 0;
    state.lives = state.tuning.starting_lives;
    state.level = 1;
    state.time_ticks = 0;
    state.ball_speed = state.tuning.ball_speed;
    state.paddle = Paddle::centered(&state.tuning);
    state.load_level();
    state.serve_ball(1.0);
    state.set_phase(GamePhase::Waiting);
    true
}

/// `GameWin -> Waiting` on the next level, with a faster ball
pub fn advance_level(state: &mut GameState) -> bool {
    if state.phase != GamePhase::GameWin {
        return false;
    }
    state.level += 1;
    state.ball_speed +=
        state.tuning.level_speed_step + state.level as f32 * state.tuning.level_speed_per_level;
    log::info!("Advancing to level {} (ball speed {:.2})", state.level, state.ball_speed);

    let direction = state
        .balls
        .first()
        .map(|b| if b.vel.x < 0.0 { -1.0 } else { 1.0 })
        .unwrap_or(1.0);
    state.load_level();
    state.serve_ball(direction);
    state.set_phase(GamePhase::Waiting);
    true
}

/// Paddle controller: keyboard first, then pointer
pub fn update_paddle(state: &mut GameState, input: &TickInput) {
    if state.phase != GamePhase::Playing {
        return;
    }
    let field_width = state.tuning.field_width;
    let paddle = &mut state.paddle;

    if input.left {
        paddle.x -= paddle.speed;
    } else if input.right {
        paddle.x += paddle.speed;
    } else if let Some(x) = input.pointer_x.filter(|x| (0.0..field_width).contains(x)) {
        paddle.x = x - paddle.width / 2.0;
    }

    paddle.clamp_to_field(field_width);
}

/// Ball physics: move, bounce off walls and paddle, drop lost balls
pub fn update_balls(state: &mut GameState) {
    let width = state.tuning.field_width;
    let height = state.tuning.field_height;
    let max_deflection = state.tuning.max_deflection;
    let paddle = state.paddle.rect();

    let before = state.balls.len();
    state.balls.retain_mut(|ball| {
        ball.pos += ball.vel;

        let contact = collision::wall_contact(ball.pos, ball.radius, width, height);
        ball.vel = collision::reflect_off_walls(ball.vel, contact);

        if contact.bottom {
            return false;
        }

        if ball.vel.y > 0.0 && touches_paddle(ball, &paddle) {
            let hit_fraction = (ball.pos.x - paddle.left()) / paddle.size.x;
            ball.vel = collision::paddle_bounce(hit_fraction, ball.vel, max_deflection);
            ball.speed = ball.vel.length();
        }
        true
    });

    let lost = before - state.balls.len();
    if lost == 0 {
        return;
    }

    for i in (0..lost).rev() {
        state.events.push(GameEvent::BallLost {
            remaining: state.balls.len() + i,
        });
    }
    log::debug!("{} ball(s) lost, {} in play", lost, state.balls.len());

    if state.balls.is_empty() {
        lose_life(state);
    }
}

fn touches_paddle(ball: &Ball, paddle: &Rect) -> bool {
    ball.pos.y + ball.radius > paddle.top()
        && ball.pos.y - ball.radius < paddle.bottom()
        && ball.pos.x > paddle.left()
        && ball.pos.x < paddle.right()
}

fn lose_life(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::LifeLost { lives: state.lives });

    if state.lives == 0 {
        log::info!("Game over at level {} with score {}", state.level, state.score);
        state.set_phase(GamePhase::GameOver);
    } else {
        let direction = state.random_direction();
        state.serve_ball(direction);
        state.set_phase(GamePhase::Waiting);
    }
}

/// Collision resolver: bricks (destroy, score, drop) then obstacles (bounce only).
/// Once the last brick falls no more bricks are tested this tick; obstacle
/// checks still run for every ball.
pub fn resolve_collisions(state: &mut GameState) {
    let mut drop_anchors: Vec<Vec2> = Vec::new();
    let mut cleared = false;

    for ball in state.balls.iter_mut() {
        let hit = if cleared {
            None
        } else {
            state
                .bricks
                .iter()
                .position(|b| b.visible && circle_overlaps_rect(ball.pos, ball.radius, &b.rect))
        };

        if let Some(index) = hit {
            let brick = &mut state.bricks[index];
            brick.visible = false;
            state.score += brick.points;
            ball.vel.y = -ball.vel.y;
            drop_anchors.push(Vec2::new(brick.rect.center().x, brick.rect.bottom()));
            state.events.push(GameEvent::BrickDestroyed {
                index,
                points: brick.points,
            });
            log::debug!("Brick {} destroyed (+{})", index, brick.points);

            cleared = !state.bricks.iter().any(|b| b.visible);
        }

        let obstacle = state
            .obstacles
            .iter()
            .position(|o| circle_overlaps_rect(ball.pos, ball.radius, &o.rect));
        if let Some(index) = obstacle {
            ball.vel.y = -ball.vel.y;
            state.events.push(GameEvent::ObstacleHit { index });
        }
    }

    for anchor in drop_anchors {
        if let Some(kind) = state.roll_item_drop() {
            spawn_item(state, kind, anchor);
        }
    }

    if cleared {
        log::info!("Level {} cleared with score {}", state.level, state.score);
        state.set_phase(GamePhase::GameWin);
    }
}

/// Drop an item with its top edge centered on `anchor`
fn spawn_item(state: &mut GameState, kind: ItemKind, anchor: Vec2) {
    let width = state.tuning.item_width;
    state.items.push(Item {
        rect: Rect::new(anchor.x - width / 2.0, anchor.y, width, state.tuning.item_height),
        kind,
        fall_speed: state.tuning.item_fall_speed,
        active: true,
    });
    state.events.push(GameEvent::ItemDropped { kind });
}

/// Item system: fall, expire off-field, apply on paddle contact
pub fn update_items(state: &mut GameState) {
    let height = state.tuning.field_height;
    let paddle = state.paddle.rect();

    let mut collected = Vec::new();
    state.items.retain_mut(|item| {
        item.rect.pos.y += item.fall_speed;
        if item.rect.top() > height {
            return false;
        }
        if item.active && item.rect.overlaps(&paddle) {
            item.active = false;
            collected.push(item.kind);
            return false;
        }
        true
    });

    for kind in collected {
        apply_item_effect(state, kind);
    }
}

/// Apply a collected power-up. Every effect clamps to its configured limit.
pub fn apply_item_effect(state: &mut GameState, kind: ItemKind) {
    let tuning = &state.tuning;
    match kind {
        ItemKind::GrowBall => {
            for ball in state.balls.iter_mut() {
                ball.radius = (ball.radius + tuning.ball_grow_step).min(tuning.ball_max_radius);
            }
        }
        ItemKind::ShrinkBall => {
            for ball in state.balls.iter_mut() {
                ball.radius = (ball.radius - tuning.ball_shrink_step).max(tuning.ball_min_radius);
            }
        }
        ItemKind::MultiBall => {
            if state.balls.len() >= tuning.max_balls {
                log::debug!("Multi-ball skipped, {} balls already in play", state.balls.len());
                state.events.push(GameEvent::MultiBallSkipped);
            } else if let Some((pos, radius)) = state.balls.first().map(|b| (b.pos, b.radius)) {
                let direction = state.random_direction();
                let clone = Ball::served(pos, radius, state.ball_speed, direction);
                state.balls.push(clone);
            }
        }
        ItemKind::GrowPaddle => {
            state.paddle.width =
                (state.paddle.width + tuning.paddle_grow_step).min(tuning.paddle_max_width);
            state.paddle.clamp_to_field(tuning.field_width);
        }
        ItemKind::ShrinkPaddle => {
            state.paddle.width =
                (state.paddle.width - tuning.paddle_shrink_step).max(tuning.paddle_min_width);
            state.paddle.clamp_to_field(tuning.field_width);
        }
    }

    log::debug!("Collected {:?}", kind);
    state.events.push(GameEvent::ItemCollected { kind });
}
