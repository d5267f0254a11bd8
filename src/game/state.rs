use super::coins::Coin;
use crate::entities::Direction;
use crate::tiles::{GridPos, TileRegistry, TileType};
use crate::world::MapConfig;
use bevy::prelude::*;

/// Session status, Won and Lost are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

/// What a single move attempt did to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The session is over, the attempt was dropped
    GameOver,
    /// Target outside the grid
    OutOfBounds(GridPos),
    /// Player stepped onto a walkable cell
    Moved(GridPos),
    /// Target is deadly: player stayed and lost a life
    Hurt { target: GridPos, lives: u32 },
    /// Target is blocked: player stayed
    Blocked(GridPos),
    /// Target is neither walkable, deadly nor blocked: player stayed
    Impassable { target: GridPos, tile_type: TileType },
}

/// Result of `GameState::apply_move`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub outcome: MoveOutcome,
    /// A coin was picked up at the player's position
    pub collected: bool,
    /// Status after the attempt
    pub status: GameStatus,
}

/// Mutable state of one game session
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    player: GridPos,
    lives: u32,
    score: u32,
    coins: Vec<Coin>,
    status: GameStatus,
}

impl GameState {
    pub fn new(start: GridPos, lives: u32, coins: Vec<Coin>) -> Self {
        Self {
            player: start,
            lives,
            score: 0,
            coins,
            status: GameStatus::Playing,
        }
    }

    pub fn player(&self) -> GridPos {
        self.player
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn total_coins(&self) -> usize {
        self.coins.len()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    /// Attempt one step of the player
    ///
    /// The target tile type decides the effect: walkable moves the player,
    /// deadly costs a life without moving, anything else leaves the player in
    /// place. Afterwards an uncollected coin under the player is picked up, then
    /// the win condition (all coins collected) is checked before the loss
    /// condition (no lives left).
    pub fn apply_move(&mut self, map: &MapConfig, registry: &TileRegistry, direction: Direction) -> MoveReport {
        if self.is_over() {
            return self.report(MoveOutcome::GameOver, false);
        }

        let target = direction.step(self.player);
        let Some(tile) = map.tile_at(target) else {
            return self.report(MoveOutcome::OutOfBounds(target), false);
        };

        let outcome = match registry.tile_type(tile) {
            TileType::Walkable => {
                self.player = target;
                MoveOutcome::Moved(target)
            }
            TileType::Deadly => {
                self.lives = self.lives.saturating_sub(1);
                MoveOutcome::Hurt {
                    target,
                    lives: self.lives,
                }
            }
            TileType::Blocked => MoveOutcome::Blocked(target),
            tile_type @ (TileType::Coin | TileType::Unknown) => MoveOutcome::Impassable { target, tile_type },
        };

        let collected = self.collect_coin_at_player();

        if self.total_coins() > 0 && self.score as usize == self.total_coins() {
            self.status = GameStatus::Won;
        } else if self.lives == 0 {
            self.status = GameStatus::Lost;
        }

        self.report(outcome, collected)
    }

    fn collect_coin_at_player(&mut self) -> bool {
        let player = self.player;
        match self.coins.iter_mut().find(|c| !c.collected && c.pos == player) {
            Some(coin) => {
                coin.collected = true;
                self.score += 1;
                true
            }
            None => false,
        }
    }

    fn report(&self, outcome: MoveOutcome, collected: bool) -> MoveReport {
        MoveReport {
            outcome,
            collected,
            status: self.status,
        }
    }
}
