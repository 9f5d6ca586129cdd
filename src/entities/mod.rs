mod enemy;
mod laser;
mod player;
mod ship;

// Re-export all public types
pub use enemy::{Drift, Enemy, EnemyKind};
pub use laser::{LASER_FOOTPRINT, Laser, LaserColor};
pub use player::{PLAYER_FOOTPRINT, PLAYER_HEALTH, Player, PlayerControls};
pub use ship::{COOLDOWN_FRAMES, Ship};
