//! Per-frame simulation tick
//!
//! One call advances every timer by one frame: path reveal, trap reveal,
//! mouse movement and the jump countdown.

use super::state::{GameEvent, GameMode, GameState, Notice, NoticeKind};
use super::traps::Trap;

/// Advance the game state by one frame
pub fn tick(state: &mut GameState) {
    match state.mode {
        GameMode::Idle | GameMode::Over | GameMode::Win => return,
        GameMode::Drawing => tick_drawing(state),
        GameMode::Play => tick_play(state),
    }
    state.time_ticks += 1;
}

fn tick_drawing(state: &mut GameState) {
    let len = state.samples().len();
    state.draw_progress = (state.draw_progress + state.tuning.draw_speed).min(len);

    // Reveal every planned trap the reveal has reached, in order
    while let Some(&target) = state.planned.front() {
        if state.draw_progress < target {
            break;
        }
        state.planned.pop_front();
        let index = target.min(len.saturating_sub(1));
        let trap = Trap {
            index,
            pos: state.samples()[index],
        };
        log::debug!("Trap placed at sample {} ({:.1}, {:.1})", index, trap.pos.x, trap.pos.y);
        state.traps.push(trap);
    }

    if state.draw_progress >= len {
        state.mode = GameMode::Play;
        state.mouse_progress = 0.0;
        log::info!("Path drawn after {} ticks, {} traps live", state.time_ticks + 1, state.traps.len());
    }
}

fn tick_play(state: &mut GameState) {
    if state.jump.active {
        state.jump.ticks_left = state.jump.ticks_left.saturating_sub(1);
        if state.jump.ticks_left == 0 {
            state.jump.active = false;
        }
    }

    let last = state.last_index() as f32;
    state.mouse_progress = (state.mouse_progress + state.tuning.mouse_speed).min(last);

    if !state.jump.active && is_caught(state) {
        state.mode = GameMode::Over;
        log::info!("Caught by a trap at sample {}", state.mouse_index());
        state.push_event(GameEvent::MusicStop);
        state.push_event(GameEvent::GameOver);
        state.push_event(GameEvent::Notice(Notice {
            kind: NoticeKind::Error,
            message: "The mouse ran into a trap. Game over!".to_string(),
            reset_on_ack: true,
        }));
    } else if state.mouse_progress >= last {
        state.mode = GameMode::Win;
        log::info!("Reached the end of the maze after {} ticks", state.time_ticks + 1);
        state.push_event(GameEvent::MusicStop);
        state.push_event(GameEvent::Win);
        state.push_event(GameEvent::Notice(Notice {
            kind: NoticeKind::Success,
            message: "The mouse made it through the maze. You win!".to_string(),
            reset_on_ack: true,
        }));
    }
}

/// True when the mouse sample lies within the collision radius of a placed trap
pub fn is_caught(state: &GameState) -> bool {
    let pos = state.samples()[state.mouse_index()];
    let radius = state.tuning.collision_radius;
    state.traps.iter().any(|trap| trap.pos.distance(pos) < radius)
}

/// Demo-mode input: jump when a placed trap is just ahead of the mouse
pub fn autopilot_wants_jump(state: &GameState) -> bool {
    if state.mode != GameMode::Play || state.jump.active {
        return false;
    }
    let reach = state.tuning.collision_radius / state.tuning.sample_step + 2.0;
    state.traps.iter().any(|trap| {
        let ahead = trap.index as f32 - state.mouse_progress;
        ahead > 0.0 && ahead <= reach
    })
}
