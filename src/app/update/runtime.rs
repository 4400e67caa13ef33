use super::super::messages::Message;
use super::super::state::{App, PAGE_SCROLL_ID, REVEAL_DELAY};
use super::Effect;
use iced::Task;
use iced::widget::scrollable::{self, AbsoluteOffset};
use tracing::debug;

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            // Fire-and-forget: a second selection inside the delay window
            // schedules a second reveal whose scroll supersedes the first.
            Effect::ScheduleReveal => Task::perform(tokio::time::sleep(REVEAL_DELAY), |_| {
                Message::RevealVideoSection
            }),
            Effect::ScrollToVideoSection => {
                let offset_y = self.video_section_target();
                debug!(offset_y, "Scrolling inline video section into view");
                scrollable::scroll_to(
                    PAGE_SCROLL_ID.clone(),
                    AbsoluteOffset { x: 0.0, y: offset_y },
                )
            }
        }
    }
}
