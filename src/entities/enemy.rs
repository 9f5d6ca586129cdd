use rand::Rng;

use super::laser::LaserColor;
use super::player::Player;
use super::ship::Ship;
use crate::collision::{Collider, Footprint, Hitbox};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Red,
    Green,
    Blue,
    Boss,
}

impl EnemyKind {
    /// Regular enemy colours picked from when spawning
    pub const COLORS: [EnemyKind; 3] = [EnemyKind::Red, EnemyKind::Green, EnemyKind::Blue];

    pub fn base_health(&self) -> u32 {
        match self {
            EnemyKind::Boss => 300,
            _ => 100,
        }
    }

    pub fn footprint(&self) -> Footprint {
        match self {
            EnemyKind::Boss => Footprint::full(75, 75),
            _ => Footprint::full(50, 50),
        }
    }

    pub fn laser_color(&self) -> LaserColor {
        match self {
            EnemyKind::Red => LaserColor::Red,
            EnemyKind::Green => LaserColor::Green,
            EnemyKind::Blue | EnemyKind::Boss => LaserColor::Blue,
        }
    }

    /// Horizontal offset of fired lasers, lining the beam up with the sprite
    pub fn shoot_offset(&self) -> i32 {
        -20
    }

    pub fn is_boss(&self) -> bool {
        *self == EnemyKind::Boss
    }

    pub fn get_name(&self) -> &'static str {
        match self {
            EnemyKind::Red => "red",
            EnemyKind::Green => "green",
            EnemyKind::Blue => "blue",
            EnemyKind::Boss => "boss",
        }
    }
}

/// Horizontal wander of an enemy: a direction held for a random number of frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drift {
    /// -1 left, 1 right
    pub direction: i32,
    /// Frames left before the direction is re-rolled
    pub timer: i32,
}

impl Drift {
    pub const MIN_INTERVAL: i32 = 50;
    pub const MAX_INTERVAL: i32 = 200;

    /// Expired, so the first step rolls a direction
    pub fn new() -> Self {
        Self {
            direction: 1,
            timer: 0,
        }
    }

    /// Advances one frame and returns the direction to move in
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> i32 {
        if self.timer <= 0 {
            self.direction = if rng.random_bool(0.5) { -1 } else { 1 };
            self.timer = rng.random_range(Self::MIN_INTERVAL..=Self::MAX_INTERVAL);
        }
        self.timer -= 1;
        self.direction
    }
}

impl Default for Drift {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub ship: Ship,
    pub kind: EnemyKind,
    pub drift: Drift,
}

impl Enemy {
    pub fn new(x: i32, y: i32, kind: EnemyKind) -> Self {
        Self {
            ship: Ship::new(x, y, kind.base_health(), kind.footprint(), kind.laser_color()),
            kind,
            drift: Drift::new(),
        }
    }

    pub fn shoot(&mut self) -> bool {
        self.ship.shoot_from(self.kind.shoot_offset())
    }

    /// Wanders sideways within [0, play_width - width] and sinks by `velocity`.
    pub fn move_random<R: Rng + ?Sized>(&mut self, velocity: i32, play_width: i32, rng: &mut R) {
        let direction = self.drift.step(rng);
        let new_x = self.ship.x + direction * velocity;
        if (0..=play_width - self.ship.width()).contains(&new_x) {
            self.ship.x = new_x;
        }
        self.ship.y += velocity;
    }

    /// Moves this enemy's lasers and resolves hits against `players` in order;
    /// a laser only hits the first player it overlaps. Returns the number of hits.
    pub fn advance_lasers(
        &mut self,
        velocity: i32,
        play_height: i32,
        damage: u32,
        players: &mut [Player],
    ) -> u32 {
        let mut hits = 0;
        self.ship
            .advance_lasers_with(velocity, play_height, |laser| {
                match players.iter_mut().find(|player| laser.collides_with(&**player)) {
                    Some(player) => {
                        player.ship.take_damage(damage);
                        hits += 1;
                        true
                    }
                    None => false,
                }
            });
        hits
    }

    pub fn past_bottom(&self, play_height: i32) -> bool {
        self.ship.y + self.ship.height() > play_height
    }
}

impl Collider for Enemy {
    fn hitbox(&self) -> Hitbox {
        self.ship.hitbox()
    }
}
