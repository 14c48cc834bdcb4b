//! Brickbreak headless driver
//!
//! Runs the simulation with an autopilot paddle and prints the final status
//! as JSON. Usage: `brickbreak [seed] [ticks] [tuning.json]`

use std::error::Error;

use brickbreak::Tuning;
use brickbreak::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

const DEFAULT_SEED: u64 = 0x5eed;
const DEFAULT_TICKS: u64 = 60 * 60 * 5;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(s) => s.parse::<u64>()?,
        None => DEFAULT_SEED,
    };
    let ticks = match args.next() {
        Some(s) => s.parse::<u64>()?,
        None => DEFAULT_TICKS,
    };
    let tuning = match args.next() {
        Some(path) => {
            log::info!("Loading tuning from {}", path);
            Tuning::from_json(&std::fs::read_to_string(&path)?)?
        }
        None => Tuning::default(),
    };

    let mut state = GameState::new(tuning, seed)?;
    log::info!("Brickbreak starting with seed {} for {} ticks", seed, ticks);

    let mut bricks_destroyed = 0u64;
    let mut items_collected = 0u64;

    for frame in 0..ticks {
        let input = autopilot(&state, frame);
        tick(&mut state, &input);

        for event in &state.events {
            match event {
                GameEvent::BrickDestroyed { .. } => bricks_destroyed += 1,
                GameEvent::ItemCollected { .. } => items_collected += 1,
                _ => {}
            }
        }

        if frame % 600 == 0 {
            log::debug!(
                "tick {}: level {} score {} lives {} balls {} bricks left {}",
                frame,
                state.level,
                state.score,
                state.lives,
                state.balls.len(),
                state.visible_bricks()
            );
        }

        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    log::info!(
        "Finished after {} playing ticks: {} bricks destroyed, {} items collected",
        state.time_ticks,
        bricks_destroyed,
        items_collected
    );
    println!("{}", serde_json::to_string_pretty(&state.status())?);
    Ok(())
}

/// Simple AI: serve, follow the lowest falling ball, move on after a win
fn autopilot(state: &GameState, frame: u64) -> TickInput {
    let mut input = TickInput::default();
    match state.phase {
        GamePhase::Waiting => input.start = true,
        GamePhase::GameWin => input.advance_level = true,
        _ => {}
    }

    let target = state
        .balls
        .iter()
        .filter(|b| b.vel.y > 0.0)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .or_else(|| state.balls.first());

    if let Some(ball) = target {
        // Vary the contact point so the ball doesn't settle into a loop
        let offset = ((frame / 97) % 5) as f32 * 12.0 - 24.0;
        let x = (ball.pos.x + offset).clamp(1.0, state.tuning.field_width - 1.0);
        input.pointer_x = Some(x);
    }
    input
}
