use crate::catalog::VideoRecord;

/// Messages emitted by the UI.
///
/// The three playback intents (`SelectVideo`, `OpenModal`, `CloseModal`) are
/// the entire write surface of the coordinator; everything else is runtime
/// plumbing. `OpenModal` is emitted from the hero call-to-action, the inline
/// maximize affordance, and the mini-player alike.
#[derive(Debug, Clone)]
pub enum Message {
    SelectVideo(&'static VideoRecord),
    OpenModal,
    CloseModal,
    Scrolled {
        offset_y: f32,
        viewport_height: f32,
        content_height: f32,
    },
    /// Fires 100ms after a selection; scrolls the inline section into view.
    RevealVideoSection,
}
