use super::spawning::{AnimationIndices, AnimationTimer};
use super::{CoinSprite, Player, TileCell};
use crate::game::GameState;
use crate::settings::GameSettings;
use crate::tiles::{GridPos, TileIndex};
use crate::world::{MapConfig, ScreenLayout};
use bevy::prelude::*;

/// Animates sprites by cycling through animation frames
pub fn animate_sprite(
    time: Res<Time>,
    mut query: Query<(&AnimationIndices, &mut AnimationTimer, &mut Sprite)>,
) {
    for (indices, mut timer, mut sprite) in &mut query {
        timer.tick(time.delta());
        if timer.just_finished() {
            if let Some(atlas) = &mut sprite.texture_atlas {
                atlas.index = indices.next(atlas.index);
            }
        }
    }
}

/// Moves the player sprite to the player's cell after a move
pub fn sync_player_transform(
    state: Res<GameState>,
    layout: Res<ScreenLayout>,
    mut player_query: Query<&mut Transform, With<Player>>,
) {
    if !state.is_changed() {
        return;
    }

    // Frame is irrelevant for placement
    let quad = layout.player_quad(state.player(), 0, 1);
    let target = layout.transform(&quad);
    for mut transform in &mut player_query {
        transform.translation = target.translation;
    }
}

/// Hides coin sprites once their coin is collected
pub fn hide_collected_coins(
    state: Res<GameState>,
    mut coin_query: Query<(&CoinSprite, &mut Visibility)>,
) {
    if !state.is_changed() {
        return;
    }

    for (coin_sprite, mut visibility) in &mut coin_query {
        let collected = state.coins().get(coin_sprite.0).is_some_and(|c| c.collected);
        if collected && *visibility != Visibility::Hidden {
            *visibility = Visibility::Hidden;
        }
    }
}

/// Redraws tiles so the cell under the player uses the highlight tile
pub fn highlight_player_tile(
    state: Res<GameState>,
    map: Res<MapConfig>,
    settings: Res<GameSettings>,
    mut tile_query: Query<(&TileCell, &mut Sprite)>,
) {
    if !state.is_changed() {
        return;
    }

    for (cell, mut sprite) in &mut tile_query {
        let Some(tile) = map.tile_at(cell.0) else {
            continue;
        };
        let shown = displayed_tile(cell.0, tile, state.player(), settings.highlight_tile, map.tile_count);
        if let Some(atlas) = &mut sprite.texture_atlas {
            if atlas.index != shown {
                atlas.index = shown;
            }
        }
    }
}

/// Atlas index drawn for a cell: the highlight tile under the player when it
/// exists in the atlas, the map's tile everywhere else
pub fn displayed_tile(
    cell: GridPos,
    tile: TileIndex,
    player: GridPos,
    highlight: Option<TileIndex>,
    tile_count: usize,
) -> TileIndex {
    match highlight {
        Some(highlight) if cell == player && highlight < tile_count => highlight,
        _ => tile,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Direction;
    use crate::game::Coin;
    use crate::tiles::TileRegistry;
    use crate::world::config::tests::SAMPLE;

    struct Scene {
        app: App,
        map: MapConfig,
        registry: TileRegistry,
        layout: ScreenLayout,
        player: Entity,
        coins: Vec<Entity>,
    }

    fn scene(coins: Vec<Coin>) -> Scene {
        let map = MapConfig::parse(SAMPLE).expect("sample should parse");
        let registry = TileRegistry::parse("[walkable]\n1\n[deadly]\n4\n", map.tile_count);
        let layout = ScreenLayout::for_map(&map, 10.0);
        let state = GameState::new(map.start, 3, coins);

        let mut app = App::new();
        app.insert_resource(layout)
            .insert_resource(state)
            .add_systems(Update, (sync_player_transform, hide_collected_coins));

        let player = app.world_mut().spawn((Player, Transform::default())).id();
        let coins = (0..app.world().resource::<GameState>().total_coins())
            .map(|index| app.world_mut().spawn((CoinSprite(index), Visibility::Visible)).id())
            .collect();

        Scene {
            app,
            map,
            registry,
            layout,
            player,
            coins,
        }
    }

    fn step(scene: &mut Scene, direction: Direction) {
        let mut state = scene.app.world_mut().resource_mut::<GameState>();
        state.apply_move(&scene.map, &scene.registry, direction);
        scene.app.update();
    }

    fn player_translation(scene: &Scene) -> Vec3 {
        scene
            .app
            .world()
            .get::<Transform>(scene.player)
            .map(|t| t.translation)
            .unwrap_or(Vec3::NAN)
    }

    fn expected_translation(scene: &Scene, pos: GridPos) -> Vec3 {
        let quad = scene.layout.player_quad(pos, 0, 1);
        scene.layout.transform(&quad).translation
    }

    #[test]
    fn test_player_sprite_follows_state() {
        let mut scene = scene(Vec::new());
        scene.app.update();
        assert_eq!(player_translation(&scene), expected_translation(&scene, GridPos::new(1, 1)));

        step(&mut scene, Direction::North);
        assert_eq!(player_translation(&scene), expected_translation(&scene, GridPos::new(0, 1)));

        // Deadly tile: the sprite stays on the current cell
        step(&mut scene, Direction::East);
        assert_eq!(player_translation(&scene), expected_translation(&scene, GridPos::new(0, 1)));
    }

    #[test]
    fn test_collected_coin_sprite_is_hidden() {
        let mut scene = scene(vec![Coin::new(GridPos::new(0, 1)), Coin::new(GridPos::new(2, 2))]);
        scene.app.update();

        step(&mut scene, Direction::North);

        let visibility = |entity: Entity| scene.app.world().get::<Visibility>(entity).copied();
        assert_eq!(visibility(scene.coins[0]), Some(Visibility::Hidden));
        assert_eq!(visibility(scene.coins[1]), Some(Visibility::Visible));
    }

    #[test]
    fn test_highlight_only_under_player() {
        let player = GridPos::new(1, 1);

        assert_eq!(displayed_tile(player, 1, player, Some(6), 7), 6);
        assert_eq!(displayed_tile(GridPos::new(0, 1), 1, player, Some(6), 7), 1);
    }

    #[test]
    fn test_highlight_needs_valid_tile() {
        let player = GridPos::new(1, 1);

        // Tileset of 6 tiles has no index 6
        assert_eq!(displayed_tile(player, 1, player, Some(6), 6), 1);
        assert_eq!(displayed_tile(player, 1, player, None, 7), 1);
    }
}
