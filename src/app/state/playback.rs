use crate::catalog::{self, VideoRecord};

/// Shared playback state for the three playback surfaces.
///
/// Single writer (the reducer), many readers (inline section, mini-player,
/// modal). The two booleans are independent: the modal may open over a
/// playing inline surface, and closing it leaves inline playback untouched.
pub struct PlaybackState {
    pub(in crate::app) active_video: &'static VideoRecord,
    pub(in crate::app) playing_inline: bool,
    pub(in crate::app) modal_open: bool,
}

impl PlaybackState {
    /// Session-start state: first catalog entry targeted, nothing playing.
    pub(in crate::app) fn at_session_start() -> Self {
        PlaybackState {
            active_video: catalog::default_video(),
            playing_inline: false,
            modal_open: false,
        }
    }
}
