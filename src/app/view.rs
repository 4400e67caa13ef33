pub(in crate::app) mod decor;

use super::messages::Message;
use super::state::{App, HERO_HEIGHT_PX, PAGE_SCROLL_ID, PLAYLIST_STRIP_HEIGHT_PX, VIDEO_SECTION_PADDING_PX};
use crate::catalog::{VIDEO_LIBRARY, VideoRecord};
use crate::theme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::text::Shaping;
use iced::widget::{
    button, canvas, center, column, container, horizontal_space, mouse_area, opaque, row,
    scrollable, stack, text,
};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let page = scrollable(
            column![
                self.hero(),
                self.video_section(),
                self.content_cards(),
                results(),
                benefits(),
                footer(),
            ]
            .width(Length::Fill),
        )
        .id(PAGE_SCROLL_ID.clone())
        .on_scroll(|viewport| Message::Scrolled {
            offset_y: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
            content_height: viewport.content_bounds().height,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let backdrop = container(canvas(&self.embers).width(Length::Fill).height(Length::Fill))
            .style(theme::backdrop)
            .width(Length::Fill)
            .height(Length::Fill);

        let mut layers = stack![backdrop, page, self.header(), self.mini_player()];

        // Mounted only while open: the modal subtree is rebuilt from scratch
        // on every open, so its transient widget state always starts fresh.
        if self.playback.modal_open {
            layers = layers.push(self.modal());
        }

        layers.into()
    }

    fn header(&self) -> Element<'_, Message> {
        let brand = row![
            text("C7").size(24).color(theme::EMBER_RED),
            text("TRADING").size(24),
        ]
        .spacing(8)
        .align_y(Vertical::Center);

        let nav = row![
            text("Conteúdo").size(14).color(theme::TEXT_MUTED),
            text("Resultados").size(14).color(theme::TEXT_MUTED),
            text("Benefícios").size(14).color(theme::TEXT_MUTED),
        ]
        .spacing(24);

        container(
            row![brand, horizontal_space(), nav]
                .align_y(Vertical::Center)
                .width(Length::Fill),
        )
        .style(theme::header_bar(self.scroll.is_scrolled()))
        .padding([18, 32])
        .width(Length::Fill)
        .into()
    }

    fn hero(&self) -> Element<'_, Message> {
        let headline = column![
            text("MASTERCLASS EXCLUSIVA").size(14).color(theme::EMBER_GOLD),
            text("A Nova Era do Trading Esportivo").size(52),
            text("Domine o método C7 e opere os mercados de futebol com a frieza de um profissional.")
                .size(18)
                .color(theme::TEXT_MUTED),
        ]
        .spacing(18)
        .align_x(Horizontal::Center)
        .max_width(760);

        let cta = button(text("Assistir agora").size(18))
            .on_press(Message::OpenModal)
            .style(theme::cta_button)
            .padding([14, 36]);

        container(column![headline, cta].spacing(32).align_x(Horizontal::Center))
            .width(Length::Fill)
            .height(Length::Fixed(HERO_HEIGHT_PX))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
    }

    fn video_section(&self) -> Element<'_, Message> {
        let video = self.playback.active_video;

        let surface: Element<'_, Message> = if self.playback.playing_inline {
            self.inline_player(video)
        } else {
            self.inline_poster(video)
        };

        let playlist = row(VIDEO_LIBRARY.iter().map(|entry| self.playlist_chip(entry)))
            .spacing(16)
            .height(Length::Fixed(PLAYLIST_STRIP_HEIGHT_PX));

        container(
            column![surface, playlist]
                .spacing(24)
                .max_width(1080)
                .width(Length::Fill),
        )
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding([VIDEO_SECTION_PADDING_PX, 32.0])
        .into()
    }

    fn inline_player(&self, video: &'static VideoRecord) -> Element<'_, Message> {
        let maximize = button(text("Maximizar").size(14))
            .on_press(Message::OpenModal)
            .style(theme::ghost_button)
            .padding([8, 16]);

        container(
            column![
                row![
                    column![
                        text(video.title).size(20),
                        text(format!("{} · {}", video.module, video.duration))
                            .size(14)
                            .color(theme::TEXT_MUTED)
                            .shaping(Shaping::Advanced),
                    ]
                    .spacing(6),
                    horizontal_space(),
                    maximize,
                ]
                .align_y(Vertical::Center)
                .width(Length::Fill),
                player_embed(video),
            ]
            .spacing(12),
        )
        .style(theme::player_frame)
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fixed(self.video_surface_height()))
        .into()
    }

    fn inline_poster(&self, video: &'static VideoRecord) -> Element<'_, Message> {
        let play = button(
            text("▶  Reproduzir aula")
                .size(18)
                .shaping(Shaping::Advanced),
        )
        .on_press(Message::SelectVideo(video))
        .style(theme::cta_button)
        .padding([14, 32]);

        container(center(
            column![
                text(video.module).size(14).color(theme::EMBER_GOLD),
                text(video.title).size(26),
                play,
                text(video.thumbnail).size(12).color(theme::TEXT_MUTED),
            ]
            .spacing(16)
            .align_x(Horizontal::Center),
        ))
        .style(theme::player_frame)
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fixed(self.video_surface_height()))
        .into()
    }

    fn playlist_chip(&self, video: &'static VideoRecord) -> Element<'_, Message> {
        let active = video.id == self.playback.active_video.id;

        button(
            container(
                column![
                    text(video.module).size(12).color(theme::EMBER_GOLD),
                    text(video.title).size(14),
                    text(video.duration).size(12).color(theme::TEXT_MUTED),
                ]
                .spacing(4),
            )
            .style(theme::card(active))
            .padding(12)
            .width(Length::Fill)
            .height(Length::Fill),
        )
        .on_press(Message::SelectVideo(video))
        .style(theme::bare_button)
        .width(Length::FillPortion(1))
        .padding(0)
        .into()
    }

    fn content_cards(&self) -> Element<'_, Message> {
        let cards = row(VIDEO_LIBRARY.iter().map(|video| self.course_card(video))).spacing(20);

        container(
            column![
                text("Conteúdo do curso").size(34),
                text("Escolha uma aula para assistir na seção acima.")
                    .size(16)
                    .color(theme::TEXT_MUTED),
                cards,
            ]
            .spacing(24)
            .max_width(1080)
            .width(Length::Fill),
        )
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding([72.0, 32.0])
        .into()
    }

    fn course_card(&self, video: &'static VideoRecord) -> Element<'_, Message> {
        let active = video.id == self.playback.active_video.id;

        button(
            container(
                column![
                    text(video.module).size(12).color(theme::EMBER_GOLD),
                    text(video.title).size(16),
                    text(video.duration).size(13).color(theme::TEXT_MUTED),
                ]
                .spacing(8),
            )
            .style(theme::card(active))
            .padding(20)
            .width(Length::Fill),
        )
        .on_press(Message::SelectVideo(video))
        .style(theme::bare_button)
        .width(Length::FillPortion(1))
        .padding(0)
        .into()
    }

    fn mini_player(&self) -> Element<'_, Message> {
        let video = self.playback.active_video;

        let chrome = container(
            button(
                row![
                    column![
                        text(video.module).size(11).color(theme::EMBER_GOLD),
                        text(video.title).size(13),
                    ]
                    .spacing(4)
                    .max_width(260),
                    text("▶")
                        .size(20)
                        .color(theme::EMBER_RED)
                        .shaping(Shaping::Advanced),
                ]
                .spacing(16)
                .align_y(Vertical::Center),
            )
            .on_press(Message::OpenModal)
            .style(theme::bare_button)
            .padding(14),
        )
        .style(theme::mini_player);

        container(chrome)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom)
            .padding(24)
            .into()
    }

    fn modal(&self) -> Element<'_, Message> {
        let video = self.playback.active_video;

        let close = button(text("✕").size(16).shaping(Shaping::Advanced))
            .on_press(Message::CloseModal)
            .style(theme::ghost_button)
            .padding([6, 12]);

        let player = container(
            column![
                row![
                    column![
                        text(video.title).size(20),
                        text(format!("{} · {}", video.module, video.duration))
                            .size(13)
                            .color(theme::TEXT_MUTED)
                            .shaping(Shaping::Advanced),
                    ]
                    .spacing(4),
                    horizontal_space(),
                    close,
                ]
                .align_y(Vertical::Center)
                .width(Length::Fill),
                player_embed(video),
            ]
            .spacing(16),
        )
        .style(theme::player_frame)
        .padding(24)
        .width(Length::Fixed(960.0))
        .height(Length::Fixed(600.0));

        // Clicks on the dimmed backdrop close the modal; clicks inside the
        // player frame stay there.
        opaque(
            mouse_area(center(opaque(player)).style(theme::modal_backdrop))
                .on_press(Message::CloseModal),
        )
    }
}

/// Stand-in surface for the external embeddable player; the URL is passed
/// through untouched.
fn player_embed(video: &'static VideoRecord) -> Element<'static, Message> {
    center(
        column![
            text("Reproduzindo no player externo")
                .size(16)
                .color(theme::TEXT_MUTED),
            text(video.video_url).size(13).color(theme::TEXT_MUTED),
        ]
        .spacing(8)
        .align_x(Horizontal::Center),
    )
    .into()
}

fn results<'a>() -> Element<'a, Message> {
    let metrics = row![
        metric("+2.300", "alunos formados"),
        metric("94%", "concluem a masterclass"),
        metric("7 anos", "de mercado ao vivo"),
    ]
    .spacing(24)
    .width(Length::Fill);

    container(
        column![text("Resultados que falam").size(34), metrics]
            .spacing(32)
            .max_width(960)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .padding([72.0, 32.0])
    .into()
}

fn metric<'a>(value: &'a str, label: &'a str) -> Element<'a, Message> {
    column![
        text(value).size(40).color(theme::EMBER_GOLD),
        text(label).size(14).color(theme::TEXT_MUTED),
    ]
    .spacing(6)
    .align_x(Horizontal::Center)
    .width(Length::FillPortion(1))
    .into()
}

fn benefits<'a>() -> Element<'a, Message> {
    container(
        column![
            text("O que você leva").size(34),
            benefit("Leituras de mercado ao vivo, sem cortes."),
            benefit("Modelos de valor esperado prontos para aplicar."),
            benefit("Gestão de banca dinâmica testada em alta liquidez."),
            benefit("Acesso vitalício às gravações da masterclass."),
        ]
        .spacing(18)
        .max_width(720)
        .width(Length::Fill),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .padding([72.0, 32.0])
    .into()
}

fn benefit<'a>(line: &'a str) -> Element<'a, Message> {
    row![
        text("✓")
            .size(16)
            .color(theme::EMBER_GOLD)
            .shaping(Shaping::Advanced),
        text(line).size(16),
    ]
    .spacing(12)
    .align_y(Vertical::Center)
    .into()
}

fn footer<'a>() -> Element<'a, Message> {
    container(
        column![
            text("C7 TRADING").size(16),
            text("Trading esportivo envolve risco. Resultados passados não garantem retornos futuros.")
                .size(12)
                .color(theme::TEXT_MUTED),
        ]
        .spacing(8)
        .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .padding([48.0, 32.0])
    .into()
}
