use super::enemy::Enemy;
use super::laser::LaserColor;
use super::ship::Ship;
use crate::collision::{Collider, Footprint, Hitbox};
use crate::config::GameConfig;

pub const PLAYER_FOOTPRINT: Footprint = Footprint::full(50, 50);
pub const PLAYER_HEALTH: u32 = 100;

/// Held controls for one player during a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerControls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub ship: Ship,
}

impl Player {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            ship: Ship::new(x, y, PLAYER_HEALTH, PLAYER_FOOTPRINT, LaserColor::Yellow),
        }
    }

    pub fn move_left(&mut self, velocity: i32) {
        if self.ship.x - velocity > 0 {
            self.ship.x -= velocity;
        }
    }

    pub fn move_right(&mut self, velocity: i32, play_width: i32) {
        if self.ship.x + velocity + self.ship.width() < play_width {
            self.ship.x += velocity;
        }
    }

    pub fn move_up(&mut self, velocity: i32) {
        if self.ship.y - velocity > 0 {
            self.ship.y -= velocity;
        }
    }

    /// `margin` keeps the health bar under the ship inside the field
    pub fn move_down(&mut self, velocity: i32, play_height: i32, margin: i32) {
        if self.ship.y + velocity + self.ship.height() + margin < play_height {
            self.ship.y += velocity;
        }
    }

    /// Applies one frame of held controls. Returns whether a laser was fired.
    pub fn steer(&mut self, controls: &PlayerControls, config: &GameConfig) -> bool {
        let velocity = config.player_velocity;
        if controls.left {
            self.move_left(velocity);
        }
        if controls.right {
            self.move_right(velocity, config.play_width);
        }
        if controls.up {
            self.move_up(velocity);
        }
        if controls.down {
            self.move_down(velocity, config.play_height, config.hud_margin);
        }

        controls.fire && self.shoot()
    }

    pub fn shoot(&mut self) -> bool {
        self.ship.shoot_from(0)
    }

    pub fn is_alive(&self) -> bool {
        !self.ship.is_destroyed()
    }

    /// Moves this player's lasers and resolves hits against the whole roster.
    /// A hit deals `damage`; enemies brought to zero health are removed.
    /// Returns the enemies destroyed.
    pub fn advance_lasers(
        &mut self,
        velocity: i32,
        play_height: i32,
        damage: u32,
        enemies: &mut Vec<Enemy>,
    ) -> Vec<Enemy> {
        let mut destroyed = Vec::new();
        self.ship
            .advance_lasers_with(velocity, play_height, |laser| {
                let Some(idx) = enemies.iter().position(|enemy| laser.collides_with(enemy)) else {
                    return false;
                };

                enemies[idx].ship.take_damage(damage);
                if enemies[idx].ship.is_destroyed() {
                    destroyed.push(enemies.remove(idx));
                }
                true
            });
        destroyed
    }
}

impl Collider for Player {
    fn hitbox(&self) -> Hitbox {
        self.ship.hitbox()
    }
}
