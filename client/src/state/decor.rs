//! Floating orb and spark descriptors for the page background.
//!
//! Descriptors are compile-time constants. Orbs carry two sensitivity
//! coefficients: `magnet` scales the pointer pull and `parallax` scales the
//! scroll drift.

#[cfg(test)]
#[path = "decor_test.rs"]
mod decor_test;

use super::motion::{CursorPosition, MotionState, ScrollProgress, translate3d};

/// Vertical magnet strength relative to horizontal.
pub const MAGNET_Y_RATIO: f64 = 0.6;

/// Blurred gradient orb drifting with pointer and scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbSpec {
    /// Diameter in px.
    pub size: f64,
    /// Anchor, percent of the container.
    pub left: f64,
    pub top: f64,
    pub color: &'static str,
    /// Blur radius in px.
    pub blur: f64,
    pub opacity: f64,
    /// Pointer pull in px per unit of cursor offset.
    pub magnet: f64,
    /// Scroll drift in px per unit of scroll offset.
    pub parallax: f64,
    /// Float animation delay and duration, seconds.
    pub delay: f64,
    pub duration: f64,
}

/// 2D translation in px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    #[must_use]
    pub fn to_css(self) -> String {
        translate3d(self.x, self.y)
    }
}

impl std::ops::Add for Offset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl OrbSpec {
    /// Pull toward the pointer; zero when the cursor is centered.
    #[must_use]
    pub fn pointer_offset(&self, cursor: CursorPosition) -> Offset {
        let (dx, dy) = cursor.offset_from_center();
        Offset { x: dx * self.magnet, y: dy * self.magnet * MAGNET_Y_RATIO }
    }

    /// Vertical drift from scroll depth; zero at mid-page.
    #[must_use]
    pub fn scroll_offset(&self, scroll: ScrollProgress) -> Offset {
        Offset { x: 0.0, y: (scroll.value() - 0.5) * self.parallax }
    }

    #[must_use]
    pub fn offset(&self, motion: MotionState) -> Offset {
        self.pointer_offset(motion.cursor) + self.scroll_offset(motion.scroll)
    }

    /// Inline style for the positioned wrapper.
    #[must_use]
    pub fn wrapper_style(&self, motion: MotionState) -> String {
        format!(
            "left: {}%; top: {}%; transform: {};",
            self.left,
            self.top,
            self.offset(motion).to_css()
        )
    }

    /// Inline style for the orb body. Static for the life of the page.
    #[must_use]
    pub fn body_style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; opacity: {opacity}; filter: blur({blur}px); \
             animation-delay: {delay}s; animation-duration: {duration}s; \
             background: radial-gradient(circle at 30% 30%, {color} 0%, rgba(124, 58, 237, 0) 70%); \
             mix-blend-mode: screen;",
            size = self.size,
            opacity = self.opacity,
            blur = self.blur,
            delay = self.delay,
            duration = self.duration,
            color = self.color,
        )
    }
}

/// Small glowing spark with a staggered pulse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SparkSpec {
    pub size: f64,
    pub left: f64,
    pub top: f64,
    pub delay: f64,
}

impl SparkSpec {
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {left}%; top: {top}%; animation-delay: {delay}s;",
            size = self.size,
            left = self.left,
            top = self.top,
            delay = self.delay,
        )
    }
}

pub const ORBS: [OrbSpec; 4] = [
    OrbSpec {
        size: 360.0,
        left: 12.0,
        top: 18.0,
        color: "rgba(162, 120, 255, 0.75)",
        blur: 55.0,
        opacity: 0.84,
        magnet: 120.0,
        parallax: 160.0,
        delay: 0.0,
        duration: 18.0,
    },
    OrbSpec {
        size: 240.0,
        left: 78.0,
        top: 12.0,
        color: "rgba(92, 84, 255, 0.65)",
        blur: 40.0,
        opacity: 0.7,
        magnet: 80.0,
        parallax: 120.0,
        delay: 1.6,
        duration: 16.0,
    },
    OrbSpec {
        size: 420.0,
        left: 58.0,
        top: 68.0,
        color: "rgba(210, 185, 255, 0.55)",
        blur: 65.0,
        opacity: 0.6,
        magnet: 90.0,
        parallax: 200.0,
        delay: 0.9,
        duration: 22.0,
    },
    OrbSpec {
        size: 180.0,
        left: 5.0,
        top: 72.0,
        color: "rgba(140, 110, 255, 0.65)",
        blur: 35.0,
        opacity: 0.6,
        magnet: 110.0,
        parallax: 150.0,
        delay: 0.6,
        duration: 14.0,
    },
];

pub const SPARKS: [SparkSpec; 3] = [
    SparkSpec { size: 90.0, left: 22.0, top: 32.0, delay: 0.0 },
    SparkSpec { size: 75.0, left: 68.0, top: 28.0, delay: 1.4 },
    SparkSpec { size: 110.0, left: 78.0, top: 64.0, delay: 2.2 },
];
