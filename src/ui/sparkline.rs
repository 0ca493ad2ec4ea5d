// ui/sparkline.rs - Inline Trend Chart
//
// Tiny line chart drawn per organization row. The series is min-max
// normalized before layout, so the chart always fills its vertical extent.

use iced::mouse;
use iced::widget::canvas::{self, Frame, Path, Stroke};
use iced::{Color, Point, Rectangle, Renderer, Theme};

use lottodesk::models::organization::normalize_trend;

const PADDING: f32 = 2.0;

pub struct Sparkline {
    normalized: Vec<f32>,
    color: Color,
}

impl Sparkline {
    pub fn new(series: &[f32], color: Color) -> Self {
        Self {
            normalized: normalize_trend(series),
            color,
        }
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
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        if self.normalized.len() >= 2 {
            let width = frame.width() - PADDING * 2.0;
            let height = frame.height() - PADDING * 2.0;
            let step = width / (self.normalized.len() - 1) as f32;

            let line = Path::new(|builder| {
                for (i, value) in self.normalized.iter().enumerate() {
                    let point = Point::new(
                        PADDING + i as f32 * step,
                        PADDING + (1.0 - value) * height,
                    );
                    if i == 0 {
                        builder.move_to(point);
                    } else {
                        builder.line_to(point);
                    }
                }
            });

            frame.stroke(
                &line,
                Stroke::default().with_color(self.color).with_width(1.5),
            );
        }

        vec![frame.into_geometry()]
    }
}
