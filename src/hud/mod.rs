mod systems;
mod ui;

pub use systems::*;
pub use ui::*;

use bevy::prelude::*;

/// Plugin for the on-screen status text and the end-of-game banner
pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_hud)
            .add_systems(Update, (update_hud_text, update_banner, update_window_title));
    }
}

/// Marker component for the lives/score line
#[derive(Component)]
pub struct HudText;

/// Marker component for the Won/Lost banner root
#[derive(Component)]
pub struct Banner;

/// Marker component for the banner's text
#[derive(Component)]
pub struct BannerText;
