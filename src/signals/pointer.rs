use serde::{Deserialize, Serialize};

/// Latest pointer position, absolute and as a share of the viewport.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PointerSignal {
    pub x: f64,
    pub y: f64,
    pub percent_x: f64,
    /// Measured from the bottom edge.
    pub percent_y: f64,
}

impl PointerSignal {
    /// Values are not clamped: a pointer outside the viewport yields
    /// percentages outside `0..=100`. A percentage that would not be finite
    /// (zero-sized viewport) keeps its previous value.
    pub fn update(&mut self, x: f64, y: f64, viewport_width: f64, viewport_height: f64) {
        self.x = x;
        self.y = y;

        let percent_x = (x / viewport_width) * 100.0;
        if percent_x.is_finite() {
            self.percent_x = percent_x;
        }
        let percent_y = 100.0 - (y / viewport_height) * 100.0;
        if percent_y.is_finite() {
            self.percent_y = percent_y;
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}
