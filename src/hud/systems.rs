use super::{Banner, BannerText, HudText};
use crate::game::{GameState, GameStatus};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Status line: lives, score and coins collected out of the total
pub fn hud_line(state: &GameState) -> String {
    let collected = state.coins().iter().filter(|c| c.collected).count();
    format!(
        "Lives: {}   Score: {}   Coins: {}/{}",
        state.lives(),
        state.score(),
        collected,
        state.total_coins()
    )
}

pub fn banner_message(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Playing => None,
        GameStatus::Won => Some("You won! All coins collected (Esc to quit)"),
        GameStatus::Lost => Some("Game over, no lives left (Esc to quit)"),
    }
}

pub fn window_title(state: &GameState) -> String {
    format!("Tile Quest | lives {} | score {}", state.lives(), state.score())
}

pub fn update_hud_text(state: Res<GameState>, mut text: Single<&mut Text, With<HudText>>) {
    if state.is_changed() {
        text.0 = hud_line(&state);
    }
}

/// Shows the banner once the session reaches Won or Lost
pub fn update_banner(
    state: Res<GameState>,
    mut banner: Single<&mut Visibility, With<Banner>>,
    mut text: Single<&mut Text, With<BannerText>>,
) {
    if !state.is_changed() {
        return;
    }

    match banner_message(state.status()) {
        Some(message) => {
            text.0 = message.to_string();
            **banner = Visibility::Visible;
        }
        None => **banner = Visibility::Hidden,
    }
}

pub fn update_window_title(state: Res<GameState>, mut window: Single<&mut Window, With<PrimaryWindow>>) {
    if state.is_changed() {
        window.title = window_title(&state);
    }
}
