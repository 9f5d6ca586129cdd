use std::time::{Duration, Instant};

/// Paces the main loop to a fixed frame rate and measures the achieved rate.
pub struct FrameClock {
    frame_duration: Duration,
    last_frame_time: Instant,
    frames: u64,
    fps: u32,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame_duration: Duration::from_secs(1) / target_fps.max(1),
            last_frame_time: Instant::now(),
            frames: 0,
            fps: 0,
        }
    }

    /// Sleeps out the rest of the current frame and starts the next one
    pub fn tick(&mut self) {
        let elapsed = self.last_frame_time.elapsed();
        if let Some(remaining) = self.frame_duration.checked_sub(elapsed) {
            std::thread::sleep(remaining);
        }

        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        if frame_time.as_micros() > 0 {
            self.fps = (1_000_000 / frame_time.as_micros()) as u32;
        }
        self.frames += 1;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }
}
