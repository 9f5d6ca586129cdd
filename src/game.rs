use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::collision::collide;
use crate::config::{GameConfig, GameMode};
use crate::entities::{Enemy, Player, PlayerControls};
use crate::session::{GameState, Session};
use crate::wave::WaveController;

/// Choice made on the pause menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseCommand {
    Resume,
    Exit,
}

/// Everything the simulation reads from the outside world in one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Indexed by player slot; slot 1 is ignored in single-player
    pub players: [PlayerControls; 2],
    pub pause_toggled: bool,
    /// Takes precedence over `pause_toggled` while paused
    pub pause_command: Option<PauseCommand>,
}

/// What happened during a frame, for sound effects and logging
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameEvents {
    pub player_shots: u32,
    pub enemy_shots: u32,
    pub enemies_destroyed: u32,
    pub bosses_destroyed: u32,
    /// Enemies that crashed into a player
    pub enemies_rammed: u32,
    pub player_hits: u32,
    pub lives_lost: u32,
    /// Level of the wave spawned this frame
    pub wave_started: Option<u32>,
    pub state_changed: Option<GameState>,
}

/// One run of the game: players, the enemy roster and the session around them.
pub struct Game {
    pub config: GameConfig,
    pub mode: GameMode,
    pub players: Vec<Player>,
    pub enemies: Vec<Enemy>,
    pub waves: WaveController,
    pub session: Session,
    rng: StdRng,
}

impl Game {
    pub fn new(config: GameConfig, mode: GameMode, seed: u64) -> Self {
        let players = (0..mode.player_count())
            .map(|slot| {
                let (x, y) = config.player_start(mode, slot);
                let mut player = Player::new(x, y);
                player.ship = player.ship.with_cooldown_frames(config.cooldown_frames);
                player
            })
            .collect();

        tracing::info!(?mode, seed, lives = config.lives, "run started");

        Self {
            waves: WaveController::new(&config),
            session: Session::new(config.lives),
            config,
            mode,
            players,
            enemies: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn state(&self) -> GameState {
        self.session.state
    }

    pub fn level(&self) -> u32 {
        self.waves.level
    }

    pub fn lives(&self) -> i32 {
        self.session.lives
    }

    fn apply_pause_command(&mut self, command: PauseCommand) {
        match command {
            PauseCommand::Resume => {
                tracing::info!("resumed from pause menu");
                self.session.resume();
            }
            PauseCommand::Exit => {
                tracing::info!(level = self.waves.level, "run ended by player");
                self.session.end();
            }
        }
    }

    /// Advances the run by one frame.
    pub fn tick(&mut self, input: &FrameInput) -> FrameEvents {
        let before = self.session.state;
        let mut events = FrameEvents::default();

        match self.session.state {
            GameState::Running if input.pause_toggled => self.session.toggle_pause(),
            GameState::Running => self.update(input, &mut events),
            GameState::Paused => match input.pause_command {
                Some(command) => self.apply_pause_command(command),
                None if input.pause_toggled => self.session.toggle_pause(),
                None => {}
            },
            GameState::Lost => self.session.advance_loss(self.config.grace_frames()),
            GameState::Ended => {}
        }

        if self.session.state != before {
            let state = self.session.state;
            match state {
                GameState::Lost => tracing::info!(
                    level = self.waves.level,
                    lives = self.session.lives,
                    "run lost"
                ),
                GameState::Ended => tracing::info!(level = self.waves.level, "run over"),
                _ => tracing::debug!(?before, ?state, "state changed"),
            }
            events.state_changed = Some(state);
        }

        events
    }

    fn update(&mut self, input: &FrameInput, events: &mut FrameEvents) {
        self.session.frame += 1;

        if self.enemies.is_empty() {
            self.enemies = self.waves.next_wave(&self.config, &mut self.rng);
            let bosses = self.enemies.iter().filter(|e| e.kind.is_boss()).count();
            tracing::info!(
                level = self.waves.level,
                enemies = self.enemies.len(),
                bosses,
                "wave started"
            );
            events.wave_started = Some(self.waves.level);
        }

        for (player, controls) in self.players.iter_mut().zip(input.players.iter()) {
            player.ship.advance_cooldown();
            if player.steer(controls, &self.config) {
                events.player_shots += 1;
            }
        }

        self.update_enemies(events);

        let velocity = -self.config.laser_velocity;
        for player in &mut self.players {
            let destroyed = player.advance_lasers(
                velocity,
                self.config.play_height,
                self.config.player_damage,
                &mut self.enemies,
            );
            events.enemies_destroyed += destroyed.len() as u32;
            events.bosses_destroyed += destroyed.iter().filter(|e| e.kind.is_boss()).count() as u32;
        }
        if events.bosses_destroyed > 0 {
            tracing::info!(
                level = self.waves.level,
                bosses = events.bosses_destroyed,
                "boss destroyed"
            );
        }

        if self.session.lives <= 0 || self.players.iter().any(|p| !p.is_alive()) {
            self.session.mark_lost();
        }
    }

    /// Moves, fires and resolves every enemy against the players. Enemies
    /// leaving the roster are marked during the pass and removed after it.
    fn update_enemies(&mut self, events: &mut FrameEvents) {
        let config = &self.config;
        let mut removed = vec![false; self.enemies.len()];

        for (idx, enemy) in self.enemies.iter_mut().enumerate() {
            enemy.ship.advance_cooldown();
            enemy.move_random(config.enemy_velocity, config.play_width, &mut self.rng);
            events.player_hits += enemy.advance_lasers(
                config.laser_velocity,
                config.play_height,
                config.enemy_damage,
                &mut self.players,
            );

            if self.rng.random_range(0..config.enemy_fire_odds) == 0 && enemy.shoot() {
                events.enemy_shots += 1;
            }

            // Player 1 takes the hit when an enemy overlaps both
            if let Some(player) = self
                .players
                .iter_mut()
                .find(|player| collide(&**player, &*enemy))
            {
                player.ship.take_damage(config.enemy_damage);
                events.enemies_rammed += 1;
                removed[idx] = true;
            } else if enemy.past_bottom(config.play_height) {
                self.session.lives -= 1;
                events.lives_lost += 1;
                removed[idx] = true;
                tracing::debug!(lives = self.session.lives, kind = enemy.kind.get_name(), "enemy got through");
            }
        }

        let mut idx = 0;
        self.enemies.retain(|_| {
            let keep = !removed[idx];
            idx += 1;
            keep
        });
    }
}
