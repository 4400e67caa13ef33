use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;
use std::time::Duration;

/// Header switches from transparent to solid past this offset (exclusive).
pub(crate) const SCROLL_THRESHOLD_PX: f32 = 50.0;

/// Pause between a selection and the scroll-into-view of the inline section,
/// so the section has swapped poster for player before the target is aimed.
pub(crate) const REVEAL_DELAY: Duration = Duration::from_millis(100);

pub(crate) const MAX_EMBER_COUNT: usize = 200;

pub(crate) static PAGE_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("page-scroll"));

// Layout estimates used to aim the scroll-into-view target.
// Keep these values in sync with `view.rs`.
pub(crate) const HERO_HEIGHT_PX: f32 = 680.0;
pub(crate) const VIDEO_SECTION_PADDING_PX: f32 = 80.0;
pub(crate) const POSTER_HEIGHT_PX: f32 = 420.0;
pub(crate) const PLAYER_HEIGHT_PX: f32 = 560.0;
pub(crate) const PLAYLIST_STRIP_HEIGHT_PX: f32 = 140.0;
