use crate::entities::{EnemyKind, LaserColor, Ship};
use crate::game::Game;
use crate::session::GameState;

/// Which picture to draw for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Player(usize),
    Enemy(EnemyKind),
    Laser(LaserColor),
}

/// A sprite placed in world units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteDraw {
    pub sprite: Sprite,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Solid part of the sprite, relative to `x`/`y`
    pub solid: (i32, i32, i32, i32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthBar {
    pub slot: usize,
    pub x: i32,
    /// Top edge, just under the ship
    pub y: i32,
    pub width: i32,
    pub ratio: f64,
    pub health: u32,
}

/// Everything a renderer needs for one frame. Holds no references into the game.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub play_width: i32,
    pub play_height: i32,
    pub sprites: Vec<SpriteDraw>,
    pub health_bars: Vec<HealthBar>,
    pub lives: i32,
    pub level: u32,
    pub player_count: usize,
    pub state: GameState,
}

impl Snapshot {
    pub fn is_paused(&self) -> bool {
        self.state == GameState::Paused
    }

    pub fn is_lost(&self) -> bool {
        matches!(self.state, GameState::Lost | GameState::Ended)
    }
}

fn ship_draw(ship: &Ship, sprite: Sprite) -> SpriteDraw {
    SpriteDraw {
        sprite,
        x: ship.x,
        y: ship.y,
        width: ship.footprint.width,
        height: ship.footprint.height,
        solid: ship.footprint.solid,
    }
}

fn laser_draws(ship: &Ship) -> impl Iterator<Item = SpriteDraw> + '_ {
    ship.lasers.iter().map(|laser| SpriteDraw {
        sprite: Sprite::Laser(laser.color),
        x: laser.x,
        y: laser.y,
        width: laser.footprint.width,
        height: laser.footprint.height,
        solid: laser.footprint.solid,
    })
}

impl Game {
    /// Draw list in painter's order: enemies, then players, each followed by its lasers.
    pub fn snapshot(&self) -> Snapshot {
        let mut sprites = Vec::new();
        for enemy in &self.enemies {
            sprites.push(ship_draw(&enemy.ship, Sprite::Enemy(enemy.kind)));
            sprites.extend(laser_draws(&enemy.ship));
        }
        for (slot, player) in self.players.iter().enumerate() {
            sprites.push(ship_draw(&player.ship, Sprite::Player(slot)));
            sprites.extend(laser_draws(&player.ship));
        }

        let health_bars = self
            .players
            .iter()
            .enumerate()
            .map(|(slot, player)| HealthBar {
                slot,
                x: player.ship.x,
                y: player.ship.y + player.ship.height() + 10,
                width: player.ship.width(),
                ratio: player.ship.health_ratio(),
                health: player.ship.health,
            })
            .collect();

        Snapshot {
            play_width: self.config.play_width,
            play_height: self.config.play_height,
            sprites,
            health_bars,
            lives: self.session.lives,
            level: self.waves.level,
            player_count: self.players.len(),
            state: self.session.state,
        }
    }
}
