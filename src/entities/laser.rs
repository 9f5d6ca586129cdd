use crate::collision::{Collider, Footprint, Hitbox, collide};

/// Laser sprite frame with the beam in the middle
pub const LASER_FOOTPRINT: Footprint = Footprint::with_solid(50, 50, (22, 10, 6, 30));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaserColor {
    Red,
    Green,
    Blue,
    Yellow,
}

#[derive(Debug, Clone)]
pub struct Laser {
    pub x: i32,
    pub y: i32,
    pub color: LaserColor,
    pub footprint: Footprint,
}

impl Laser {
    pub fn new(x: i32, y: i32, color: LaserColor) -> Self {
        Self {
            x,
            y,
            color,
            footprint: LASER_FOOTPRINT,
        }
    }

    /// Moves vertically; negative velocity travels up the screen
    pub fn advance(&mut self, velocity: i32) {
        self.y += velocity;
    }

    pub fn off_screen(&self, play_height: i32) -> bool {
        self.y < 0 || self.y > play_height
    }

    pub fn collides_with<T: Collider + ?Sized>(&self, target: &T) -> bool {
        collide(self, target)
    }
}

impl Collider for Laser {
    fn hitbox(&self) -> Hitbox {
        self.footprint.hitbox_at(self.x, self.y)
    }
}
