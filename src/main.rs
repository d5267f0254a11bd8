use anyhow::Context;
use bevy::prelude::*;
use rand::Rng;
use std::env;

mod entities;
mod game;
mod hud;
mod settings;
mod tiles;
mod world;

use game::{generate_coins, GamePlugin, GameState};
use hud::HudPlugin;
use settings::{GameSettings, SETTINGS_PATH};
use tiles::TileRegistry;
use world::{MapConfig, ScreenLayout};

fn main() -> anyhow::Result<()> {
    // Optional first argument overrides the settings file
    let settings_path = env::args().nth(1).unwrap_or_else(|| SETTINGS_PATH.to_string());
    let settings = GameSettings::load_or_default(&settings_path)
        .with_context(|| format!("failed to load settings from {}", settings_path))?;

    let map = MapConfig::load(&settings.map_config)
        .with_context(|| format!("failed to load map config {}", settings.map_config.display()))?;
    let registry = TileRegistry::load(&settings.tile_properties, map.tile_count).with_context(|| {
        format!(
            "failed to load tile properties {}",
            settings.tile_properties.display()
        )
    })?;

    let mut rng = rand::rng();
    let coins = generate_coins(&map, &registry, settings.coin_chance, settings.max_coins, || {
        rng.random::<f32>()
    });
    let state = GameState::new(map.start, settings.lives, coins);
    let layout = ScreenLayout::for_map(&map, settings.margin);

    App::new()
        .add_plugins(DefaultPlugins.set(ImagePlugin::default_nearest()))
        .insert_resource(settings)
        .insert_resource(map)
        .insert_resource(registry)
        .insert_resource(layout)
        .insert_resource(state)
        .add_plugins((GamePlugin, HudPlugin))
        .run();

    Ok(())
}
