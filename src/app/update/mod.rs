mod playback;
mod reducer;
mod runtime;
mod scroll;

/// Describes work that must be performed outside the pure reducer.
pub(super) enum Effect {
    /// Wait out the poster-to-player swap, then revisit the inline section.
    ScheduleReveal,
    ScrollToVideoSection,
}
