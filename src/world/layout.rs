use super::config::MapConfig;
use super::grid::cell_to_screen;
use crate::tiles::{GridPos, COIN_HEIGHT_FACTOR, COIN_WIDTH_FACTOR, COIN_Z, PLAYER_Z, TILE_Z_BASE};
use bevy::prelude::*;

/// Texture a quad samples from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadTexture {
    Tileset,
    Coin,
    Player,
}

/// One drawable handed to the renderer: a screen rectangle (centre, y down)
/// plus the frame it shows from a horizontal strip atlas of `frames` frames.
/// The atlas offset of the frame is `frame / frames` along the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawQuad {
    pub texture: QuadTexture,
    pub center: Vec2,
    pub size: Vec2,
    pub frame: usize,
    pub frames: usize,
    pub z: f32,
}

impl DrawQuad {
    /// Horizontal texture offset of the frame in [0, 1)
    pub fn atlas_offset(&self) -> f32 {
        self.frame as f32 / self.frames.max(1) as f32
    }
}

/// Screen placement of the isometric map inside the window
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ScreenLayout {
    /// Screen position of cell (0, 0)
    pub origin: Vec2,
    pub tile_size: Vec2,
    pub window_size: Vec2,
    /// rows + cols, used to spread tile depth over [0, 1)
    depth_span: f32,
}

impl ScreenLayout {
    /// Size the window so the whole diamond fits with `margin` pixels around it
    pub fn for_map(map: &MapConfig, margin: f32) -> Self {
        let tile_size = Vec2::new(map.tile_width as f32, map.tile_height as f32);
        let span = (map.rows + map.cols) as f32 / 2.0;

        Self {
            origin: Vec2::new(margin + (map.rows - 1) as f32 * tile_size.x / 2.0, margin),
            tile_size,
            window_size: span * tile_size + Vec2::splat(2.0 * margin),
            depth_span: (map.rows + map.cols) as f32,
        }
    }

    /// Centre of a cell's tile quad in screen space
    pub fn tile_center(&self, pos: GridPos) -> Vec2 {
        cell_to_screen(pos, self.tile_size, self.origin) + self.tile_size / 2.0
    }

    /// Centre of a sprite standing on a cell: bottom edge on the tile centre
    pub fn standing_center(&self, pos: GridPos, sprite_size: Vec2) -> Vec2 {
        self.tile_center(pos) - Vec2::new(0.0, sprite_size.y / 2.0)
    }

    pub fn player_size(&self) -> Vec2 {
        Vec2::splat(self.tile_size.x)
    }

    pub fn coin_size(&self) -> Vec2 {
        self.tile_size * Vec2::new(COIN_WIDTH_FACTOR, COIN_HEIGHT_FACTOR)
    }

    /// Tile quad for a cell; cells further down the screen draw in front
    pub fn tile_quad(&self, pos: GridPos, tile: usize, tile_count: usize) -> DrawQuad {
        DrawQuad {
            texture: QuadTexture::Tileset,
            center: self.tile_center(pos),
            size: self.tile_size,
            frame: tile,
            frames: tile_count,
            z: TILE_Z_BASE + (pos.row + pos.col) as f32 / self.depth_span,
        }
    }

    pub fn coin_quad(&self, pos: GridPos) -> DrawQuad {
        let size = self.coin_size();
        DrawQuad {
            texture: QuadTexture::Coin,
            center: self.standing_center(pos, size),
            size,
            frame: 0,
            frames: 1,
            z: COIN_Z,
        }
    }

    pub fn player_quad(&self, pos: GridPos, frame: usize, frames: usize) -> DrawQuad {
        let size = self.player_size();
        DrawQuad {
            texture: QuadTexture::Player,
            center: self.standing_center(pos, size),
            size,
            frame,
            frames,
            z: PLAYER_Z,
        }
    }

    /// Convert screen space (origin top-left, y down) to world space
    /// (origin at the window centre, y up)
    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            screen.x - self.window_size.x / 2.0,
            self.window_size.y / 2.0 - screen.y,
        )
    }

    /// World transform placing a quad's centre
    pub fn transform(&self, quad: &DrawQuad) -> Transform {
        let world = self.to_world(quad.center);
        Transform::from_xyz(world.x, world.y, quad.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::config::tests::SAMPLE;

    fn sample_layout() -> ScreenLayout {
        let map = MapConfig::parse(SAMPLE).expect("sample should parse");
        ScreenLayout::for_map(&map, 10.0)
    }

    #[test]
    fn test_window_fits_diamond() {
        let layout = sample_layout();

        // 3x3 map of 114x57 tiles
        assert_eq!(layout.window_size, Vec2::new(3.0 * 114.0 + 20.0, 3.0 * 57.0 + 20.0));
        assert_eq!(layout.origin, Vec2::new(10.0 + 114.0, 10.0));

        // Leftmost cell touches the left margin, bottom cell the bottom margin
        let left = layout.tile_center(GridPos::new(2, 0)).x - 57.0;
        assert_eq!(left, 10.0);
        let bottom = layout.tile_center(GridPos::new(2, 2)).y + 28.5;
        assert_eq!(bottom, layout.window_size.y - 10.0);
    }

    #[test]
    fn test_standing_sprites_sit_on_tile_centre() {
        let layout = sample_layout();
        let pos = GridPos::new(1, 1);
        let center = layout.tile_center(pos);

        let player = layout.player_quad(pos, 6, 15);
        assert_eq!(player.size, Vec2::splat(114.0));
        assert_eq!(player.center.x, center.x);
        assert_eq!(player.center.y + player.size.y / 2.0, center.y);

        let coin = layout.coin_quad(pos);
        assert!((coin.size.x - 45.6).abs() < 1e-3);
        assert!((coin.size.y - 51.3).abs() < 1e-3);
        assert!((coin.center.y + coin.size.y / 2.0 - center.y).abs() < 1e-3);
    }

    #[test]
    fn test_draw_order() {
        let layout = sample_layout();

        let back = layout.tile_quad(GridPos::new(0, 0), 1, 7);
        let front = layout.tile_quad(GridPos::new(2, 2), 1, 7);
        let coin = layout.coin_quad(GridPos::new(2, 2));
        let player = layout.player_quad(GridPos::new(2, 2), 6, 15);

        assert!(back.z < front.z);
        assert!(front.z < coin.z);
        assert!(coin.z < player.z);
    }

    #[test]
    fn test_tile_quad_frame() {
        let layout = sample_layout();
        let quad = layout.tile_quad(GridPos::new(0, 2), 4, 7);

        assert_eq!(quad.texture, QuadTexture::Tileset);
        assert_eq!((quad.frame, quad.frames), (4, 7));
        assert!((quad.atlas_offset() - 4.0 / 7.0).abs() < 1e-6);
        assert_eq!(layout.coin_quad(GridPos::new(0, 2)).atlas_offset(), 0.0);
        assert_eq!(quad.center, layout.tile_center(GridPos::new(0, 2)));
    }

    #[test]
    fn test_screen_to_world() {
        let layout = sample_layout();
        let size = layout.window_size;

        assert_eq!(layout.to_world(Vec2::ZERO), Vec2::new(-size.x / 2.0, size.y / 2.0));
        assert_eq!(layout.to_world(size / 2.0), Vec2::ZERO);

        let quad = layout.coin_quad(GridPos::new(0, 0));
        let transform = layout.transform(&quad);
        assert_eq!(transform.translation.z, COIN_Z);
    }
}
