use super::super::state::{
    App, HERO_HEIGHT_PX, PLAYER_HEIGHT_PX, PLAYLIST_STRIP_HEIGHT_PX, POSTER_HEIGHT_PX,
    VIDEO_SECTION_PADDING_PX,
};

impl App {
    pub(super) fn handle_scrolled(
        &mut self,
        offset_y: f32,
        viewport_height: f32,
        content_height: f32,
    ) {
        self.scroll.offset_y = Self::sanitize_dimension(offset_y);
        self.scroll.viewport_height = Self::sanitize_dimension(viewport_height);
        self.scroll.content_height = Self::sanitize_dimension(content_height);
    }

    /// Estimated absolute offset that centers the inline video section in the
    /// viewport. The section is taller once it has swapped poster for player,
    /// which is why the reveal runs after the swap, not before.
    pub(super) fn video_section_target(&self) -> f32 {
        let section_height = VIDEO_SECTION_PADDING_PX * 2.0
            + self.video_surface_height()
            + PLAYLIST_STRIP_HEIGHT_PX;
        let viewport = if self.scroll.viewport_height > 0.0 {
            self.scroll.viewport_height
        } else {
            self.config.window_height.max(1.0)
        };

        let desired_top = HERO_HEIGHT_PX + (section_height - viewport) / 2.0;

        let mut target = desired_top.max(0.0);
        if self.scroll.content_height > viewport {
            target = target.min(self.scroll.content_height - viewport);
        }
        target
    }

    pub(in crate::app) fn video_surface_height(&self) -> f32 {
        if self.playback.playing_inline {
            PLAYER_HEIGHT_PX
        } else {
            POSTER_HEIGHT_PX
        }
    }

    fn sanitize_dimension(value: f32) -> f32 {
        if value.is_finite() { value.max(0.0) } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::App;
    use crate::catalog::VIDEO_LIBRARY;
    use crate::config::AppConfig;

    fn build_test_app() -> App {
        let (mut app, _task) = App::bootstrap(AppConfig::default());
        app.reduce(Message::Scrolled {
            offset_y: 0.0,
            viewport_height: 720.0,
            content_height: 4200.0,
        });
        app
    }

    #[test]
    fn scroll_events_are_sanitized() {
        let mut app = build_test_app();
        app.reduce(Message::Scrolled {
            offset_y: -12.0,
            viewport_height: f32::NAN,
            content_height: f32::INFINITY,
        });
        assert_eq!(app.scroll.offset_y, 0.0);
        assert_eq!(app.scroll.viewport_height, 0.0);
        assert_eq!(app.scroll.content_height, 0.0);
    }

    #[test]
    fn player_layout_targets_deeper_than_poster() {
        let mut app = build_test_app();
        let poster_target = app.video_section_target();

        app.reduce(Message::SelectVideo(&VIDEO_LIBRARY[0]));
        let player_target = app.video_section_target();

        assert!(
            player_target > poster_target,
            "centering the taller player layout should land deeper in the page"
        );
    }

    #[test]
    fn target_clamps_to_scrollable_range() {
        let mut app = build_test_app();
        app.reduce(Message::Scrolled {
            offset_y: 0.0,
            viewport_height: 700.0,
            content_height: 900.0,
        });
        let target = app.video_section_target();
        assert!(target <= 200.0);
        assert!(target >= 0.0);
    }

    #[test]
    fn target_is_finite_before_any_scroll_event() {
        let (app, _task) = App::bootstrap(AppConfig::default());
        let target = app.video_section_target();
        assert!(target.is_finite());
        assert!(target >= 0.0);
    }
}
