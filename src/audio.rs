use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source, source::Buffered};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::game::FrameEvents;

const PLAYER_SHOT_VOLUME: f32 = 0.3;
const ENEMY_SHOT_VOLUME: f32 = 0.01;

struct AudioOutput {
    _stream: OutputStream,
    stream_handle: OutputStreamHandle,
    /// Pre-loaded and buffered laser sound
    laser_sound: Buffered<Decoder<BufReader<File>>>,
}

/// Plays sound effects for frame events; silent when no device or sound file is available
pub struct AudioManager {
    output: Option<AudioOutput>,
}

impl AudioManager {
    /// Opens the default output device and buffers the laser sound at `sound_path`
    pub fn new(sound_path: &Path) -> color_eyre::Result<Self> {
        let (stream, stream_handle) = OutputStream::try_default()?;
        let file = File::open(sound_path)?;
        let laser_sound = Decoder::new(BufReader::new(file))?.buffered();

        Ok(Self {
            output: Some(AudioOutput {
                _stream: stream,
                stream_handle,
                laser_sound,
            }),
        })
    }

    pub fn silent() -> Self {
        Self { output: None }
    }

    pub fn load_or_silent(sound_path: &Path) -> Self {
        Self::new(sound_path).unwrap_or_else(|err| {
            tracing::warn!(path = %sound_path.display(), %err, "audio disabled");
            Self::silent()
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.output.is_some()
    }

    pub fn play_frame(&self, events: &FrameEvents) {
        if events.player_shots > 0 {
            self.play_laser(PLAYER_SHOT_VOLUME);
        }
        if events.enemy_shots > 0 {
            self.play_laser(ENEMY_SHOT_VOLUME);
        }
    }

    fn play_laser(&self, volume: f32) {
        let Some(output) = &self.output else {
            return;
        };
        // A failed sink only costs this one sound
        match Sink::try_new(&output.stream_handle) {
            Ok(sink) => {
                sink.set_volume(volume);
                sink.append(output.laser_sound.clone());
                sink.detach();
            }
            Err(err) => tracing::debug!(%err, "could not play laser sound"),
        }
    }
}
