pub mod coins;
pub mod state;
pub mod systems;

pub use coins::{generate_coins, Coin};
pub use state::{GameState, GameStatus, MoveOutcome, MoveReport};
pub use systems::*;

use crate::entities::{animate_sprite, highlight_player_tile, hide_collected_coins, sync_player_transform};
use crate::world::loader::{configure_window, log_session_summary, setup_scene};
use bevy::prelude::*;

/// Plugin for the map scene and the movement state machine
///
/// Expects `MapConfig`, `TileRegistry`, `GameSettings`, `ScreenLayout` and
/// `GameState` to be inserted before the app runs.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<MoveRequest>()
            .add_systems(Startup, (configure_window, setup_scene, log_session_summary))
            .add_systems(
                Update,
                (
                    read_move_input,
                    apply_move_requests.after(read_move_input),
                    (sync_player_transform, hide_collected_coins, highlight_player_tile)
                        .after(apply_move_requests),
                    animate_sprite,
                ),
            );
    }
}
