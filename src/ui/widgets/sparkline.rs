// SPDX-License-Identifier: MPL-2.0
//! Trend sparkline widget using Canvas.

use crate::domain::TrendSeries;
use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};

/// Small line chart of the metric trend window.
pub struct Sparkline {
    cache: Cache,
    points: Vec<f32>,
    color: Color,
}

impl Sparkline {
    /// Snapshots the trend series into a drawable widget.
    #[must_use]
    pub fn new(trend: &TrendSeries, color: Color) -> Self {
        Self {
            cache: Cache::default(),
            points: trend.points().collect(),
            color,
        }
    }

    /// Creates a Canvas widget from this sparkline.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::SPARKLINE_WIDTH))
            .height(Length::Fixed(sizing::SPARKLINE_HEIGHT))
            .into()
    }
}

impl<Message> canvas::Program<Message> for Sparkline {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                if self.points.len() < 2 {
                    return;
                }

                let min = self.points.iter().copied().fold(f32::INFINITY, f32::min);
                let max = self
                    .points
                    .iter()
                    .copied()
                    .fold(f32::NEG_INFINITY, f32::max);
                // Flat series still draws a visible midline.
                let span = (max - min).max(0.1);

                let inset = 3.0;
                let width = frame.width() - inset * 2.0;
                let height = frame.height() - inset * 2.0;
                let step = width / (self.points.len() - 1) as f32;

                let position = |i: usize, value: f32| {
                    let x = inset + i as f32 * step;
                    let y = inset + height * (1.0 - (value - min) / span);
                    Point::new(x, y)
                };

                let mut line = canvas::path::Builder::new();
                line.move_to(position(0, self.points[0]));
                for (i, value) in self.points.iter().enumerate().skip(1) {
                    line.line_to(position(i, *value));
                }
                frame.stroke(
                    &line.build(),
                    Stroke::default()
                        .with_width(2.0)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );

                // Highlight the latest point.
                let last = self.points.len() - 1;
                let dot = Path::circle(position(last, self.points[last]), 2.5);
                frame.fill(&dot, self.color);
            });

        vec![geometry]
    }
}
