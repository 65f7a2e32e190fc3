//! # Bring-up Test Pattern
//!
//! A fixed image that makes pitch or addressing bugs visible at a glance:
//!
//! ```text
//! ┌──────────────────────────────────────────┐  white 1 px border
//! │                                          │
//! │   ████   ████   ████   ████              │  80×80 squares at x = 50, 150, 250, 350
//! │   red    green  blue   yellow            │  (y = 50)
//! │                                          │
//! │                 black                    │
//! └──────────────────────────────────────────┘
//! ```
//!
//! Every step overwrites pixels unconditionally, so rendering twice yields the
//! same memory contents.

use crate::{Color, Framebuffer};

/// Edge length of each square, in pixels.
pub const SQUARE_SIZE: u32 = 80;

/// Top-left corner of the first square.
pub const SQUARE_ORIGIN: (u32, u32) = (50, 50);

/// Horizontal distance between the left edges of neighboring squares.
pub const SQUARE_STRIDE: u32 = 100;

/// Square colors, left to right.
pub const SQUARE_COLORS: [Color; 4] = [Color::RED, Color::GREEN, Color::BLUE, Color::YELLOW];

pub const BACKGROUND: Color = Color::BLACK;

pub const BORDER: Color = Color::WHITE;

/// Draw the bring-up pattern over the whole surface.
pub fn render_test_pattern(fb: &mut Framebuffer<'_>) {
    fb.clear(BACKGROUND);

    let (origin_x, origin_y) = SQUARE_ORIGIN;
    let mut x = origin_x;
    for color in SQUARE_COLORS {
        fb.fill_rect(x, origin_y, SQUARE_SIZE, SQUARE_SIZE, color);
        x = x.saturating_add(SQUARE_STRIDE);
    }

    fb.draw_border(BORDER);
    log::trace!(
        "test pattern rendered on {}x{} surface",
        fb.width(),
        fb.height()
    );
}
