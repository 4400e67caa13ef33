mod constants;
mod playback;
mod scroll;

use crate::catalog::VIDEO_LIBRARY;
use crate::config::AppConfig;
use iced::Task;

use super::messages::Message;
use super::view::decor::EmberField;

pub(crate) use constants::*;
pub(in crate::app) use playback::PlaybackState;
pub(in crate::app) use scroll::ScrollState;

/// Core application state composed of sub-models.
pub struct App {
    pub(super) playback: PlaybackState,
    pub(super) scroll: ScrollState,
    pub(super) config: AppConfig,
    pub(super) embers: EmberField,
}

impl App {
    pub(super) fn bootstrap(mut config: AppConfig) -> (App, Task<Message>) {
        clamp_config(&mut config);
        let embers = if config.ambient_effects {
            EmberField::generate(config.ember_seed, config.ember_count)
        } else {
            EmberField::empty()
        };
        tracing::info!(
            videos = VIDEO_LIBRARY.len(),
            embers = embers.len(),
            "Initialized page state"
        );

        let app = App {
            playback: PlaybackState::at_session_start(),
            scroll: ScrollState::at_top(),
            config,
            embers,
        };
        (app, Task::none())
    }
}

fn clamp_config(config: &mut AppConfig) {
    config.window_width = config.window_width.clamp(320.0, 7680.0);
    config.window_height = config.window_height.clamp(240.0, 4320.0);
    config.window_pos_x = config.window_pos_x.filter(|v| v.is_finite());
    config.window_pos_y = config.window_pos_y.filter(|v| v.is_finite());
    config.ember_count = config.ember_count.min(MAX_EMBER_COUNT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn bootstrap_starts_at_defaults() {
        let (app, _task) = App::bootstrap(AppConfig::default());
        assert_eq!(app.playback.active_video, catalog::default_video());
        assert!(!app.playback.playing_inline);
        assert!(!app.playback.modal_open);
        assert_eq!(app.scroll.offset_y, 0.0);
    }

    #[test]
    fn bootstrap_clamps_ember_count() {
        let config = AppConfig {
            ember_count: 10_000,
            ..AppConfig::default()
        };
        let (app, _task) = App::bootstrap(config);
        assert_eq!(app.config.ember_count, MAX_EMBER_COUNT);
        assert_eq!(app.embers.len(), MAX_EMBER_COUNT);
    }

    #[test]
    fn bootstrap_honors_disabled_effects() {
        let config = AppConfig {
            ambient_effects: false,
            ..AppConfig::default()
        };
        let (app, _task) = App::bootstrap(config);
        assert_eq!(app.embers.len(), 0);
    }
}
