//! Pointer and scroll samples driving the decorative motion.
//!
//! DESIGN
//! ======
//! Raw browser numbers are normalized once, at the edge, into types whose
//! constructors enforce the `[0, 1]` range. Everything downstream (orb
//! offsets, hero tilt) is a pure function of these values.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Pointer position as a fraction of the viewport, each axis in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorPosition {
    x: f64,
    y: f64,
}

impl CursorPosition {
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    /// Normalize client coordinates against the viewport size.
    ///
    /// A degenerate viewport axis (zero, negative or NaN) maps to the center.
    #[must_use]
    pub fn from_client(client_x: f64, client_y: f64, viewport_width: f64, viewport_height: f64) -> Self {
        Self { x: normalize_axis(client_x, viewport_width), y: normalize_axis(client_y, viewport_height) }
    }

    #[must_use]
    pub fn x(self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(self) -> f64 {
        self.y
    }

    /// Signed distance from the viewport center, each axis in `[-0.5, 0.5]`.
    #[must_use]
    pub fn offset_from_center(self) -> (f64, f64) {
        (self.x - 0.5, self.y - 0.5)
    }
}

impl Default for CursorPosition {
    fn default() -> Self {
        Self::CENTER
    }
}

fn normalize_axis(client: f64, extent: f64) -> f64 {
    if extent.is_nan() || extent <= 0.0 {
        return 0.5;
    }
    let ratio = client / extent;
    if ratio.is_nan() { 0.5 } else { ratio.clamp(0.0, 1.0) }
}

/// Vertical scroll depth as a fraction of the scrollable range, in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    pub const TOP: Self = Self(0.0);

    /// `scroll_y / (scroll_height - viewport_height)`, or zero when the
    /// content fits the viewport. Overscroll is clamped into range.
    #[must_use]
    pub fn from_metrics(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> Self {
        let max = scroll_height - viewport_height;
        if max.is_nan() || max <= 0.0 {
            return Self::TOP;
        }
        let ratio = scroll_y / max;
        if ratio.is_nan() { Self::TOP } else { Self(ratio.clamp(0.0, 1.0)) }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Latest published pointer and scroll state, provided through context.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionState {
    pub cursor: CursorPosition,
    pub scroll: ScrollProgress,
}

/// Which `MotionState` field a window event feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionInput {
    Cursor,
    Scroll,
}

/// Window events the tracker subscribes to, all registered passive.
/// `resize` changes the scrollable range, so it re-samples scroll.
pub const TRACKED_EVENTS: [(&str, MotionInput); 3] = [
    ("pointermove", MotionInput::Cursor),
    ("scroll", MotionInput::Scroll),
    ("resize", MotionInput::Scroll),
];

/// Hero card tilt following the cursor.
#[must_use]
pub fn hero_tilt_transform(cursor: CursorPosition) -> String {
    let (dx, dy) = cursor.offset_from_center();
    format!(
        "perspective(1400px) rotateX({:.2}deg) rotateY({:.2}deg) scale(1.01)",
        unsigned_zero(dy * -10.0),
        unsigned_zero(dx * 12.0)
    )
}

/// Small drift applied to the hero metrics grid.
#[must_use]
pub fn metrics_transform(cursor: CursorPosition) -> String {
    let (dx, dy) = cursor.offset_from_center();
    translate3d(dx * 16.0, dy * 12.0)
}

/// `translate3d` with two decimals, never printing a negative zero.
#[must_use]
pub fn translate3d(x: f64, y: f64) -> String {
    format!("translate3d({:.2}px, {:.2}px, 0)", unsigned_zero(x), unsigned_zero(y))
}

// Round to the printed precision first so tiny negatives collapse to -0.0,
// then adding positive zero turns -0.0 into 0.0.
fn unsigned_zero(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}
