use raylib::prelude::*;

const DOT_SIZE: f32 = 12.0;
const DOT_GAP: f32 = 14.0;
const DOT_BOTTOM_MARGIN: f32 = 36.0;
const DOT_HIT_PADDING: f32 = 6.0;
const BUTTON_SIZE: f32 = 56.0;
const BUTTON_MARGIN: f32 = 24.0;

/// A clickable control drawn over the slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Indicator(usize),
    Previous,
    Next,
}

/// Screen rectangles of the indicator dots and prev/next buttons.
pub struct Layout {
    indicators: Vec<Rectangle>,
    previous: Rectangle,
    next: Rectangle,
}

fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

impl Layout {
    pub fn compute(screen_width: f32, screen_height: f32, indicator_count: usize) -> Layout {
        // Dots centered in a row near the bottom edge
        let row_width = indicator_count as f32 * DOT_SIZE
            + indicator_count.saturating_sub(1) as f32 * DOT_GAP;
        let row_x = (screen_width - row_width) * 0.5;
        let row_y = screen_height - DOT_BOTTOM_MARGIN - DOT_SIZE;

        let indicators = (0..indicator_count)
            .map(|i| Rectangle::new(row_x + i as f32 * (DOT_SIZE + DOT_GAP), row_y, DOT_SIZE, DOT_SIZE))
            .collect();

        let button_y = (screen_height - BUTTON_SIZE) * 0.5;
        Layout {
            indicators,
            previous: Rectangle::new(BUTTON_MARGIN, button_y, BUTTON_SIZE, BUTTON_SIZE),
            next: Rectangle::new(
                screen_width - BUTTON_MARGIN - BUTTON_SIZE,
                button_y,
                BUTTON_SIZE,
                BUTTON_SIZE,
            ),
        }
    }

    pub fn indicators(&self) -> &[Rectangle] {
        &self.indicators
    }

    pub fn previous(&self) -> Rectangle {
        self.previous
    }

    pub fn next(&self) -> Rectangle {
        self.next
    }

    pub fn hit_test(&self, point: Vector2) -> Option<Control> {
        if contains(&self.previous, point) {
            return Some(Control::Previous);
        }
        if contains(&self.next, point) {
            return Some(Control::Next);
        }
        self.indicators
            .iter()
            .position(|dot| {
                let padded = Rectangle::new(
                    dot.x - DOT_HIT_PADDING,
                    dot.y - DOT_HIT_PADDING,
                    dot.width + DOT_HIT_PADDING * 2.0,
                    dot.height + DOT_HIT_PADDING * 2.0,
                );
                contains(&padded, point)
            })
            .map(Control::Indicator)
    }
}
