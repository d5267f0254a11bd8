use super::{CoinSprite, Player, TileCell};
use crate::settings::GameSettings;
use crate::tiles::GridPos;
use crate::world::{DrawQuad, MapConfig, QuadTexture, ScreenLayout};
use bevy::prelude::*;

/// Animation components
#[derive(Component, Debug, Clone, Copy)]
pub struct AnimationIndices {
    pub first: usize,
    pub last: usize,
}

impl AnimationIndices {
    pub fn new(first: usize, last: usize) -> Self {
        Self { first, last }
    }

    /// Frame shown after `current`, wrapping back to `first`
    pub fn next(&self, current: usize) -> usize {
        if current >= self.last || current < self.first {
            self.first
        } else {
            current + 1
        }
    }
}

#[derive(Component, Deref, DerefMut)]
pub struct AnimationTimer(pub Timer);

impl AnimationTimer {
    pub fn from_seconds(seconds: f32) -> Self {
        Self(Timer::from_seconds(seconds, TimerMode::Repeating))
    }
}

/// Image and atlas handles for everything the scene draws
pub struct SceneTextures {
    pub tileset: Handle<Image>,
    pub tileset_layout: Handle<TextureAtlasLayout>,
    pub coin: Handle<Image>,
    pub player: Handle<Image>,
    pub player_layout: Handle<TextureAtlasLayout>,
}

impl SceneTextures {
    pub fn load(
        assets: &AssetServer,
        texture_atlas_layouts: &mut Assets<TextureAtlasLayout>,
        map: &MapConfig,
        settings: &GameSettings,
    ) -> Self {
        // Tileset is a single row of nTiles tiles
        let tileset_layout = TextureAtlasLayout::from_grid(
            UVec2::new(map.tile_width, map.tile_height),
            map.tile_count as u32,
            1,
            None,
            None,
        );
        let [frame_w, frame_h] = settings.player_frame_size;
        let player_layout = TextureAtlasLayout::from_grid(
            UVec2::new(frame_w, frame_h),
            settings.player_frames as u32,
            1,
            None,
            None,
        );

        Self {
            tileset: assets.load(map.tileset_file.clone()),
            tileset_layout: texture_atlas_layouts.add(tileset_layout),
            coin: assets.load(settings.coin_image.clone()),
            player: assets.load(settings.player_sheet.clone()),
            player_layout: texture_atlas_layouts.add(player_layout),
        }
    }

    /// Sprite drawing `quad` at its screen size
    pub fn sprite(&self, quad: &DrawQuad) -> Sprite {
        let mut sprite = match quad.texture {
            QuadTexture::Tileset => Sprite::from_atlas_image(
                self.tileset.clone(),
                TextureAtlas {
                    layout: self.tileset_layout.clone(),
                    index: quad.frame,
                },
            ),
            QuadTexture::Player => Sprite::from_atlas_image(
                self.player.clone(),
                TextureAtlas {
                    layout: self.player_layout.clone(),
                    index: quad.frame,
                },
            ),
            QuadTexture::Coin => Sprite::from_image(self.coin.clone()),
        };
        sprite.custom_size = Some(quad.size);
        sprite
    }
}

/// Spawns the tile sprite for one grid cell
pub fn spawn_tile(
    commands: &mut Commands,
    textures: &SceneTextures,
    layout: &ScreenLayout,
    pos: GridPos,
    quad: DrawQuad,
) -> Entity {
    debug!(
        "Tile {} at cell {} (atlas offset {:.3})",
        quad.frame,
        pos,
        quad.atlas_offset()
    );
    commands
        .spawn((TileCell(pos), textures.sprite(&quad), layout.transform(&quad)))
        .id()
}

/// Spawns a coin sprite, `index` points into the session's coin list
pub fn spawn_coin(
    commands: &mut Commands,
    textures: &SceneTextures,
    layout: &ScreenLayout,
    index: usize,
    pos: GridPos,
) -> Entity {
    let quad = layout.coin_quad(pos);
    commands
        .spawn((CoinSprite(index), textures.sprite(&quad), layout.transform(&quad)))
        .id()
}

/// Spawns the animated player sprite at the given cell
pub fn spawn_player(
    commands: &mut Commands,
    textures: &SceneTextures,
    layout: &ScreenLayout,
    pos: GridPos,
    settings: &GameSettings,
) -> Entity {
    let animation_indices = AnimationIndices::new(settings.player_first_frame, settings.player_last_frame);
    let quad = layout.player_quad(pos, animation_indices.first, settings.player_frames);

    commands
        .spawn((
            Player,
            textures.sprite(&quad),
            layout.transform(&quad),
            animation_indices,
            AnimationTimer::from_seconds(settings.frame_seconds),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_loops_within_range() {
        let indices = AnimationIndices::new(6, 12);

        let mut frame = indices.first;
        let mut seen = vec![frame];
        for _ in 0..7 {
            frame = indices.next(frame);
            seen.push(frame);
        }

        assert_eq!(seen, vec![6, 7, 8, 9, 10, 11, 12, 6]);
    }

    #[test]
    fn test_animation_recovers_from_foreign_frame() {
        let indices = AnimationIndices::new(6, 12);
        assert_eq!(indices.next(0), 6);
        assert_eq!(indices.next(14), 6);
    }

    #[test]
    fn test_animation_timer_period() {
        let timer = AnimationTimer::from_seconds(0.1);
        assert!((timer.duration().as_secs_f32() - 0.1).abs() < 1e-6);
        assert_eq!(timer.mode(), TimerMode::Repeating);
    }
}
