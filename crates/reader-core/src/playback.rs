//! Story audio playback toggle.
//!
//! Audio is fetched at most once per story: the first toggle asks the host
//! to fetch and synthesize, later toggles flip play/pause on the handle the
//! host already holds. Displaying a new story resets to `Idle` and tells
//! the host to release that handle.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No audio fetched for the current story.
    Idle,
    Playing,
    /// Audio fetched and available; not currently playing.
    Paused,
}

/// What the host should do with its audio element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Fetch,
    Play,
    Pause,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playback {
    state: PlaybackState,
    fetch_in_flight: bool,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            state: PlaybackState::Idle,
            fetch_in_flight: false,
        }
    }
}

impl Playback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Handles a press of the audio button. Returns `None` while a fetch is
    /// outstanding (the button is disabled, but a stale event is harmless).
    pub fn toggle(&mut self) -> Option<PlaybackCommand> {
        match self.state {
            PlaybackState::Idle => {
                if self.fetch_in_flight {
                    return None;
                }
                self.fetch_in_flight = true;
                Some(PlaybackCommand::Fetch)
            }
            PlaybackState::Playing => {
                self.state = PlaybackState::Paused;
                Some(PlaybackCommand::Pause)
            }
            PlaybackState::Paused => {
                self.state = PlaybackState::Playing;
                Some(PlaybackCommand::Play)
            }
        }
    }

    /// The fetch finished; the host has a playable handle and has started it.
    pub fn audio_ready(&mut self) {
        self.fetch_in_flight = false;
        self.state = PlaybackState::Playing;
    }

    pub fn audio_failed(&mut self) {
        self.fetch_in_flight = false;
        self.state = PlaybackState::Idle;
    }

    /// Playback reached the end of the story.
    pub fn ended(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// Resets for a new story. Returns `true` when the host holds an audio
    /// handle that should be released.
    pub fn reset(&mut self) -> bool {
        let had_audio = self.state != PlaybackState::Idle;
        self.state = PlaybackState::Idle;
        self.fetch_in_flight = false;
        had_audio
    }
}
