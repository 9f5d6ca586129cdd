#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Running,
    Paused,
    /// Loss banner is up; gameplay frozen until the grace period runs out
    Lost,
    Ended,
}

/// Per-run bookkeeping shown on the HUD
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Shared by every player in the run
    pub lives: i32,
    pub state: GameState,
    /// Frames spent in [`GameState::Lost`]
    pub lost_counter: u32,
    /// Gameplay frames simulated
    pub frame: u64,
}

impl Session {
    pub fn new(lives: i32) -> Self {
        Self {
            lives,
            state: GameState::Running,
            lost_counter: 0,
            frame: 0,
        }
    }

    /// The run is finished and its screen can be left
    pub fn is_over(&self) -> bool {
        self.state == GameState::Ended
    }

    /// Flips between running and paused; ignored once the run is lost
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            GameState::Running => GameState::Paused,
            GameState::Paused => GameState::Running,
            other => other,
        };
    }

    pub fn resume(&mut self) {
        if self.state == GameState::Paused {
            self.state = GameState::Running;
        }
    }

    pub fn end(&mut self) {
        self.state = GameState::Ended;
    }

    pub fn mark_lost(&mut self) {
        if matches!(self.state, GameState::Running | GameState::Paused) {
            self.state = GameState::Lost;
            self.lost_counter = 0;
        }
    }

    /// Counts one frame of the grace period, ending the run when it is used up
    pub fn advance_loss(&mut self, grace_frames: u32) {
        if self.state != GameState::Lost {
            return;
        }
        self.lost_counter += 1;
        if self.lost_counter >= grace_frames {
            self.state = GameState::Ended;
        }
    }
}
