use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Enemy, EnemyKind};

/// Tracks wave progression and builds each new wave of enemies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveController {
    /// Waves started so far
    pub level: u32,
    /// Enemies in the most recent wave
    pub wave_length: u32,
}

impl WaveController {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            level: 0,
            wave_length: config.initial_wave_length,
        }
    }

    /// Starts the next wave: one level up, `wave_growth` more enemies, each
    /// slot a boss with probability 1/`boss_odds`, otherwise a random colour.
    /// Enemies start staggered above the field.
    pub fn next_wave<R: Rng + ?Sized>(&mut self, config: &GameConfig, rng: &mut R) -> Vec<Enemy> {
        self.level += 1;
        self.wave_length += config.wave_growth;

        let x_max = (config.play_width - config.spawn_x_margin).max(config.spawn_x_min);
        (0..self.wave_length)
            .map(|_| {
                let kind = if rng.random_range(0..config.boss_odds) == 0 {
                    EnemyKind::Boss
                } else {
                    EnemyKind::COLORS[rng.random_range(0..EnemyKind::COLORS.len())]
                };
                let x = rng.random_range(config.spawn_x_min..=x_max);
                let y = rng.random_range(config.spawn_y_min..=config.spawn_y_max);

                let mut enemy = Enemy::new(x, y, kind);
                enemy.ship = enemy.ship.with_cooldown_frames(config.cooldown_frames);
                enemy
            })
            .collect()
    }
}
