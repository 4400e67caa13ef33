//! Ambient decoration: background glow clusters and a field of ember dots.
//!
//! Purely cosmetic. The field is generated once at startup from a config
//! seed, draws through a cached canvas layer, and feeds nothing back into
//! the playback state.

use crate::theme::{EMBER_GOLD, EMBER_ORANGE, EMBER_RED, with_alpha};
use iced::mouse;
use iced::widget::canvas::{self, Geometry, Path};
use iced::{Color, Point, Rectangle, Renderer, Theme};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub(in crate::app) struct EmberField {
    particles: Vec<Ember>,
    cache: canvas::Cache,
}

struct Ember {
    x: f32,
    y: f32,
    radius: f32,
    alpha: f32,
}

impl EmberField {
    pub(in crate::app) fn generate(seed: u64, count: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| Ember {
                x: rng.gen_range(0.0..1.0),
                y: rng.gen_range(0.0..1.0),
                radius: rng.gen_range(1.0..2.5),
                alpha: 0.3 + rng.gen_range(0.0..0.7),
            })
            .collect();
        EmberField {
            particles,
            cache: canvas::Cache::new(),
        }
    }

    pub(in crate::app) fn empty() -> Self {
        EmberField {
            particles: Vec::new(),
            cache: canvas::Cache::new(),
        }
    }

    pub(in crate::app) fn len(&self) -> usize {
        self.particles.len()
    }
}

impl<Message> canvas::Program<Message> for EmberField {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let layer = self.cache.draw(renderer, bounds.size(), |frame| {
            let width = frame.width();
            let height = frame.height();

            glow(frame, Point::new(width * 0.12, height * 0.08), width * 0.45, EMBER_RED);
            glow(
                frame,
                Point::new(width * 0.88, height * 0.92),
                width * 0.45,
                EMBER_ORANGE,
            );
            glow(frame, Point::new(width * 0.5, height * 0.5), width * 0.15, EMBER_GOLD);

            for ember in &self.particles {
                frame.fill(
                    &Path::circle(
                        Point::new(ember.x * width, ember.y * height),
                        ember.radius,
                    ),
                    with_alpha(EMBER_ORANGE, ember.alpha * 0.5),
                );
            }
        });

        vec![layer]
    }
}

/// Concentric translucent discs stand in for a blurred radial glow.
fn glow(frame: &mut canvas::Frame, center: Point, radius: f32, color: Color) {
    const RINGS: u32 = 6;
    for ring in 0..RINGS {
        let fraction = 1.0 - ring as f32 / RINGS as f32;
        frame.fill(
            &Path::circle(center, radius * fraction),
            with_alpha(color, 0.03),
        );
    }
}
