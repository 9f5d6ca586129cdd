// Library exports for the binary and integration tests
pub use collision::{Collider, Footprint, Hitbox, collide};
pub use config::{GameConfig, GameMode};
pub use entities::{Enemy, EnemyKind, Laser, LaserColor, Player, PlayerControls, Ship};
pub use game::{FrameEvents, FrameInput, Game, PauseCommand};
pub use session::{GameState, Session};
pub use snapshot::Snapshot;
pub use wave::WaveController;

pub mod app;
pub mod audio;
pub mod clock;
pub mod collision;
pub mod config;
pub mod entities;
pub mod game;
pub mod input;
pub mod menu;
pub mod renderer;
pub mod session;
pub mod snapshot;
pub mod wave;
