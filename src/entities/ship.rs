use super::laser::{Laser, LaserColor};
use crate::collision::{Collider, Footprint, Hitbox};

/// Frames a ship waits between shots unless configured otherwise
pub const COOLDOWN_FRAMES: u32 = 30;

/// State shared by every ship: players, enemies and bosses.
#[derive(Debug, Clone)]
pub struct Ship {
    pub x: i32,
    pub y: i32,
    pub health: u32,
    pub max_health: u32,
    /// 0 when ready to fire, otherwise counts up to `cooldown_frames`
    pub cooldown: u32,
    pub cooldown_frames: u32,
    pub lasers: Vec<Laser>,
    pub footprint: Footprint,
    pub laser_color: LaserColor,
}

impl Ship {
    pub fn new(x: i32, y: i32, health: u32, footprint: Footprint, laser_color: LaserColor) -> Self {
        Self {
            x,
            y,
            health,
            max_health: health,
            cooldown: 0,
            cooldown_frames: COOLDOWN_FRAMES,
            lasers: Vec::new(),
            footprint,
            laser_color,
        }
    }

    pub fn with_cooldown_frames(mut self, cooldown_frames: u32) -> Self {
        self.cooldown_frames = cooldown_frames;
        self
    }

    pub fn width(&self) -> i32 {
        self.footprint.width
    }

    pub fn height(&self) -> i32 {
        self.footprint.height
    }

    pub fn can_fire(&self) -> bool {
        self.cooldown == 0
    }

    /// Fires a laser from `offset_x` relative to the ship if the cooldown allows.
    /// Returns whether a laser was added.
    pub fn shoot_from(&mut self, offset_x: i32) -> bool {
        if !self.can_fire() {
            return false;
        }

        self.lasers
            .push(Laser::new(self.x + offset_x, self.y, self.laser_color));
        self.cooldown = 1;
        true
    }

    /// Once per frame, before any shot is attempted
    pub fn advance_cooldown(&mut self) {
        if self.cooldown >= self.cooldown_frames {
            self.cooldown = 0;
        } else if self.cooldown > 0 {
            self.cooldown += 1;
        }
    }

    pub fn take_damage(&mut self, damage: u32) {
        self.health = self.health.saturating_sub(damage);
    }

    /// Restores health, never past `max_health`
    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }

    pub fn health_ratio(&self) -> f64 {
        if self.max_health == 0 {
            return 0.0;
        }
        f64::from(self.health) / f64::from(self.max_health)
    }

    /// Moves every laser, dropping those that left the field or for which
    /// `hit` reports a hit.
    pub(crate) fn advance_lasers_with<F>(&mut self, velocity: i32, play_height: i32, mut hit: F)
    where
        F: FnMut(&Laser) -> bool,
    {
        self.lasers.retain_mut(|laser| {
            laser.advance(velocity);
            !laser.off_screen(play_height) && !hit(laser)
        });
    }
}

impl Collider for Ship {
    fn hitbox(&self) -> Hitbox {
        self.footprint.hitbox_at(self.x, self.y)
    }
}
