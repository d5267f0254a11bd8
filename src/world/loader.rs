use super::{MapConfig, ScreenLayout};
use crate::entities::{spawn_coin, spawn_player, spawn_tile, systems::displayed_tile, SceneTextures};
use crate::game::GameState;
use crate::settings::GameSettings;
use crate::tiles::{TileRegistry, TileType};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Sizes the primary window so the whole map fits
pub fn configure_window(layout: Res<ScreenLayout>, mut window: Single<&mut Window, With<PrimaryWindow>>) {
    window
        .resolution
        .set(layout.window_size.x, layout.window_size.y);
    window.resizable = false;
}

/// Spawns the camera, every map tile, the coins and the player
pub fn setup_scene(
    mut commands: Commands,
    assets: Res<AssetServer>,
    mut texture_atlas_layouts: ResMut<Assets<TextureAtlasLayout>>,
    map: Res<MapConfig>,
    layout: Res<ScreenLayout>,
    settings: Res<GameSettings>,
    state: Res<GameState>,
) {
    // World origin is the window centre, see ScreenLayout::to_world
    commands.spawn((Camera2d, Transform::from_xyz(0.0, 0.0, 999.0)));

    let textures = SceneTextures::load(&assets, &mut texture_atlas_layouts, &map, &settings);

    for (pos, tile) in map.cells() {
        let shown = displayed_tile(pos, tile, state.player(), settings.highlight_tile, map.tile_count);
        let quad = layout.tile_quad(pos, shown, map.tile_count);
        spawn_tile(&mut commands, &textures, &layout, pos, quad);
    }

    for (index, coin) in state.coins().iter().enumerate() {
        spawn_coin(&mut commands, &textures, &layout, index, coin.pos);
    }

    spawn_player(&mut commands, &textures, &layout, state.player(), &settings);

    info!(
        "Scene ready: {} tiles, {} coins",
        map.cell_count(),
        state.total_coins()
    );
}

/// Logs what was loaded at startup
pub fn log_session_summary(
    map: Res<MapConfig>,
    registry: Res<TileRegistry>,
    settings: Res<GameSettings>,
    state: Res<GameState>,
) {
    info!(
        "Map {}x{} using {} ({} tiles of {}x{}), start {}",
        map.rows, map.cols, map.tileset_file, map.tile_count, map.tile_width, map.tile_height, map.start
    );
    info!(
        "Tile types of {} tiles: {} walkable, {} deadly, {} blocked, {} coin, {} unknown",
        registry.tile_count(),
        registry.count_of(TileType::Walkable),
        registry.count_of(TileType::Deadly),
        registry.count_of(TileType::Blocked),
        registry.count_of(TileType::Coin),
        registry.count_of(TileType::Unknown)
    );
    for entry in registry.skipped() {
        warn!("Tile properties {}", entry);
    }
    if let Some(highlight) = settings.highlight_tile {
        if !registry.is_valid_tile(highlight) {
            warn!("Highlight tile {} is not in the tileset, cell under the player keeps its tile", highlight);
        }
    }
    info!(
        "{} coins placed, {} lives",
        state.total_coins(),
        state.lives()
    );
}
