use super::state::{GameState, GameStatus, MoveOutcome, MoveReport};
use crate::entities::Direction;
use crate::tiles::TileRegistry;
use crate::world::MapConfig;
use bevy::prelude::*;

/// One requested player step, produced by input and consumed by the state
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest(pub Direction);

/// Turns key presses into move requests, Escape quits
pub fn read_move_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<GameState>,
    mut moves: MessageWriter<MoveRequest>,
    mut exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
        return;
    }
    if state.is_over() {
        return;
    }

    for key in keyboard.get_just_pressed() {
        if let Some(direction) = Direction::from_key(*key) {
            moves.write(MoveRequest(direction));
        }
    }
}

/// Applies pending move requests to the game state
pub fn apply_move_requests(
    mut requests: MessageReader<MoveRequest>,
    map: Res<MapConfig>,
    registry: Res<TileRegistry>,
    mut state: ResMut<GameState>,
) {
    for MoveRequest(direction) in requests.read() {
        let was_playing = !state.is_over();
        let report = state.apply_move(&map, &registry, *direction);
        log_move(&report, &state);

        if was_playing && report.status != GameStatus::Playing {
            info!(
                "Game over: {:?} with {} of {} coins and {} lives left",
                report.status,
                state.score(),
                state.total_coins(),
                state.lives()
            );
        }
    }
}

fn log_move(report: &MoveReport, state: &GameState) {
    match report.outcome {
        MoveOutcome::GameOver => debug!("Move ignored, game is over"),
        MoveOutcome::OutOfBounds(target) => debug!("Move to {} is outside the map", target),
        MoveOutcome::Moved(target) => debug!("Player moved to {}", target),
        MoveOutcome::Hurt { target, lives } => warn!("Deadly tile at {}, {} lives left", target, lives),
        MoveOutcome::Blocked(target) => info!("Tile at {} is blocked", target),
        MoveOutcome::Impassable { target, tile_type } => {
            info!("Tile at {} is {:?}, staying put", target, tile_type)
        }
    }

    if report.collected {
        info!("Coin collected, score {}/{}", state.score(), state.total_coins());
    }
}
