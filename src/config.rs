/// Tunables for a run, in world units (pixels of the play field) and frames.
///
/// Built once at startup and handed to [`crate::game::Game`]; nothing in the
/// simulation reads global state.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub play_width: i32,
    pub play_height: i32,
    pub fps: u32,
    pub lives: i32,
    pub player_velocity: i32,
    pub laser_velocity: i32,
    pub enemy_velocity: i32,
    /// Frames a ship must wait between shots
    pub cooldown_frames: u32,
    /// One in `enemy_fire_odds` chance per enemy per frame
    pub enemy_fire_odds: u32,
    /// One in `boss_odds` chance per spawn slot
    pub boss_odds: u32,
    pub initial_wave_length: u32,
    pub wave_growth: u32,
    pub spawn_x_min: i32,
    /// Distance from the right edge that spawns stay clear of
    pub spawn_x_margin: i32,
    pub spawn_y_min: i32,
    pub spawn_y_max: i32,
    /// Damage an enemy laser or an enemy ramming deals to a player
    pub enemy_damage: u32,
    /// Damage a player laser deals to an enemy
    pub player_damage: u32,
    /// Seconds the loss banner stays up before the run ends
    pub grace_seconds: u32,
    /// Room kept below a player for its health bar
    pub hud_margin: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            play_width: 750,
            play_height: 750,
            fps: 60,
            lives: 5,
            player_velocity: 5,
            laser_velocity: 5,
            enemy_velocity: 1,
            cooldown_frames: 30,
            enemy_fire_odds: 120,
            boss_odds: 10,
            initial_wave_length: 5,
            wave_growth: 5,
            spawn_x_min: 50,
            spawn_x_margin: 100,
            spawn_y_min: -1500,
            spawn_y_max: -100,
            enemy_damage: 10,
            player_damage: 100,
            grace_seconds: 3,
            hud_margin: 15,
        }
    }
}

impl GameConfig {
    pub fn grace_frames(&self) -> u32 {
        self.fps * self.grace_seconds
    }

    /// Starting position of the player in `slot` for the given mode
    pub fn player_start(&self, mode: GameMode, slot: usize) -> (i32, i32) {
        let y = self.play_height - 120;
        match (mode, slot) {
            (GameMode::Single, _) => (300, y),
            (GameMode::Two, 0) => (200, y),
            (GameMode::Two, _) => (400, y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Single,
    Two,
}

impl GameMode {
    pub fn player_count(&self) -> usize {
        match self {
            GameMode::Single => 1,
            GameMode::Two => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grace_period_is_three_seconds_of_frames() {
        let config = GameConfig::default();
        assert_eq!(config.grace_frames(), 180);
    }

    #[test]
    fn test_player_start_positions() {
        let config = GameConfig::default();
        assert_eq!(config.player_start(GameMode::Single, 0), (300, 630));
        assert_eq!(config.player_start(GameMode::Two, 0), (200, 630));
        assert_eq!(config.player_start(GameMode::Two, 1), (400, 630));
    }
}
