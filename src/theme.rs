//! Palette and widget styles for the dark, ember-lit landing page.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

pub const PAGE_BACKGROUND: Color = Color {
    r: 0.004,
    g: 0.004,
    b: 0.004,
    a: 1.0,
};
pub const EMBER_RED: Color = Color {
    r: 0.86,
    g: 0.15,
    b: 0.15,
    a: 1.0,
};
pub const EMBER_ORANGE: Color = Color {
    r: 0.92,
    g: 0.35,
    b: 0.05,
    a: 1.0,
};
pub const EMBER_GOLD: Color = Color {
    r: 0.92,
    g: 0.70,
    b: 0.03,
    a: 1.0,
};
pub const TEXT_PRIMARY: Color = Color::WHITE;
pub const TEXT_MUTED: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 0.6,
};

pub fn with_alpha(color: Color, a: f32) -> Color {
    Color { a, ..color }
}

/// Page-wide backdrop behind every layer.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PAGE_BACKGROUND)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

/// Header bar; transparent at the top of the page, solid once scrolled.
pub fn header_bar(solid: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        if solid {
            container::Style {
                background: Some(Background::Color(with_alpha(PAGE_BACKGROUND, 0.92))),
                text_color: Some(TEXT_PRIMARY),
                border: Border {
                    color: with_alpha(EMBER_RED, 0.25),
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            }
        } else {
            container::Style {
                text_color: Some(TEXT_PRIMARY),
                ..Default::default()
            }
        }
    }
}

/// Panel for a catalog card; the active video gets an ember border.
pub fn card(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(with_alpha(Color::WHITE, 0.04))),
        text_color: Some(TEXT_PRIMARY),
        border: Border {
            color: if active {
                with_alpha(EMBER_RED, 0.8)
            } else {
                with_alpha(Color::WHITE, 0.08)
            },
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

/// Frame around the inline player / poster and the modal player.
pub fn player_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::BLACK)),
        text_color: Some(TEXT_PRIMARY),
        border: Border {
            color: with_alpha(EMBER_RED, 0.4),
            width: 1.0,
            radius: 16.0.into(),
        },
        shadow: Shadow {
            color: with_alpha(EMBER_RED, 0.2),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 40.0,
        },
        ..Default::default()
    }
}

/// Floating mini-player chrome, bottom-right of the page.
pub fn mini_player(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(Color::from_rgb(0.05, 0.02, 0.02), 0.95))),
        text_color: Some(TEXT_PRIMARY),
        border: Border {
            color: with_alpha(EMBER_ORANGE, 0.4),
            width: 1.0,
            radius: 14.0.into(),
        },
        shadow: Shadow {
            color: with_alpha(Color::BLACK, 0.6),
            offset: Vector::new(0.0, 6.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

/// Dimming layer behind the modal player.
pub fn modal_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(Color::BLACK, 0.8))),
        ..Default::default()
    }
}

/// Primary call-to-action.
pub fn cta_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => EMBER_ORANGE,
        _ => EMBER_RED,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: TEXT_PRIMARY,
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: with_alpha(EMBER_RED, 0.35),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 18.0,
        },
    }
}

/// Quiet button used for secondary affordances (maximize, close, cards).
pub fn ghost_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => with_alpha(Color::WHITE, 0.1),
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: TEXT_PRIMARY,
        border: Border {
            color: with_alpha(Color::WHITE, 0.15),
            width: 1.0,
            radius: 10.0.into(),
        },
        ..Default::default()
    }
}

/// Invisible button wrapper so whole cards can emit a message.
pub fn bare_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => with_alpha(Color::WHITE, 0.03),
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: TEXT_PRIMARY,
        border: Border {
            radius: 12.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
