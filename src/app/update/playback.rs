use super::super::state::App;
use super::Effect;
use crate::catalog::VideoRecord;
use tracing::info;

impl App {
    /// Targets `video` on every playback surface and commits the inline
    /// section to player mode. Membership in the catalog is the caller's
    /// contract; the handler does not re-validate it.
    pub(super) fn handle_select_video(
        &mut self,
        video: &'static VideoRecord,
        effects: &mut Vec<Effect>,
    ) {
        info!(id = video.id, title = video.title, "Selected video");
        self.playback.active_video = video;
        self.playback.playing_inline = true;
        effects.push(Effect::ScheduleReveal);
    }

    pub(super) fn handle_open_modal(&mut self) {
        if !self.playback.modal_open {
            info!(id = self.playback.active_video.id, "Opened modal player");
        }
        self.playback.modal_open = true;
    }

    /// Leaves `active_video` and the inline surface exactly as they were;
    /// playback position lives in the external embed and is not ours to keep.
    pub(super) fn handle_close_modal(&mut self) {
        if self.playback.modal_open {
            info!("Closed modal player");
        }
        self.playback.modal_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::App;
    use super::super::Effect;
    use crate::catalog::VIDEO_LIBRARY;
    use crate::config::AppConfig;

    fn build_test_app() -> App {
        let (app, _task) = App::bootstrap(AppConfig::default());
        app
    }

    #[test]
    fn initial_state_targets_first_video() {
        let app = build_test_app();
        assert_eq!(app.playback.active_video, &VIDEO_LIBRARY[0]);
        assert!(!app.playback.playing_inline);
        assert!(!app.playback.modal_open);
    }

    #[test]
    fn selecting_any_video_starts_inline_playback() {
        for video in VIDEO_LIBRARY {
            let mut app = build_test_app();
            app.reduce(Message::SelectVideo(video));
            assert_eq!(app.playback.active_video, video);
            assert!(app.playback.playing_inline);
        }
    }

    #[test]
    fn selecting_emits_the_reveal_effect() {
        let mut app = build_test_app();
        let effects = app.reduce(Message::SelectVideo(&VIDEO_LIBRARY[1]));
        assert!(matches!(effects.as_slice(), [Effect::ScheduleReveal]));
    }

    #[test]
    fn reselecting_while_playing_switches_video() {
        let mut app = build_test_app();
        app.reduce(Message::SelectVideo(&VIDEO_LIBRARY[1]));
        app.reduce(Message::SelectVideo(&VIDEO_LIBRARY[3]));
        assert_eq!(app.playback.active_video, &VIDEO_LIBRARY[3]);
        assert!(app.playback.playing_inline);
    }

    #[test]
    fn open_modal_is_idempotent() {
        let mut app = build_test_app();
        app.reduce(Message::OpenModal);
        app.reduce(Message::OpenModal);
        assert!(app.playback.modal_open);
        assert_eq!(app.playback.active_video, &VIDEO_LIBRARY[0]);
        assert!(!app.playback.playing_inline);
    }

    #[test]
    fn close_modal_when_closed_is_a_noop() {
        let mut app = build_test_app();
        app.reduce(Message::CloseModal);
        assert!(!app.playback.modal_open);
        assert_eq!(app.playback.active_video, &VIDEO_LIBRARY[0]);
        assert!(!app.playback.playing_inline);
    }

    #[test]
    fn modal_intents_emit_no_effects() {
        let mut app = build_test_app();
        assert!(app.reduce(Message::OpenModal).is_empty());
        assert!(app.reduce(Message::CloseModal).is_empty());
    }

    #[test]
    fn closing_modal_resumes_inline_playback_as_left() {
        let mut app = build_test_app();
        app.reduce(Message::SelectVideo(&VIDEO_LIBRARY[2]));
        app.reduce(Message::OpenModal);
        app.reduce(Message::CloseModal);
        assert_eq!(app.playback.active_video, &VIDEO_LIBRARY[2]);
        assert!(app.playback.playing_inline);
        assert!(!app.playback.modal_open);
    }

    #[test]
    fn selecting_while_modal_open_keeps_modal_open() {
        let mut app = build_test_app();
        app.reduce(Message::OpenModal);
        app.reduce(Message::SelectVideo(&VIDEO_LIBRARY[1]));
        assert_eq!(app.playback.active_video, &VIDEO_LIBRARY[1]);
        assert!(app.playback.playing_inline);
        assert!(app.playback.modal_open);
    }
}
