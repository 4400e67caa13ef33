use super::super::messages::Message;
use super::super::state::App;
use super::Effect;
use iced::Task;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }

    /// Central reducer: every state transition goes through here, serialized
    /// on the event loop, so the playback state has exactly one writer.
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::SelectVideo(video) => self.handle_select_video(video, &mut effects),
            Message::OpenModal => self.handle_open_modal(),
            Message::CloseModal => self.handle_close_modal(),
            Message::Scrolled {
                offset_y,
                viewport_height,
                content_height,
            } => self.handle_scrolled(offset_y, viewport_height, content_height),
            Message::RevealVideoSection => effects.push(Effect::ScrollToVideoSection),
        }

        effects
    }
}
