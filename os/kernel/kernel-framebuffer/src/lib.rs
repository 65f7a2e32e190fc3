//! # Early Framebuffer Rendering
//!
//! Pixel output for the first moments after the boot loader hands over: no
//! heap, no page fault handler, nothing to report a bad write to. The crate
//! therefore keeps all address arithmetic in one place.
//!
//! * [`Geometry`] is a checked width/height/pitch triple. Constructing one proves
//!   that every visible pixel's byte offset is representable.
//! * [`Framebuffer`] pairs a geometry with a memory span and exposes
//!   [`plot`](Framebuffer::plot) as the single write path. Out-of-range
//!   coordinates are silently dropped.
//! * [`pattern::render_test_pattern`] draws the fixed bring-up image.
//!
//! Pixels are 32 bits wide (`0x00RRGGBB`, see [`Color`]). The pitch is honored
//! exactly; it is never assumed to equal `width * 4`.
//!
//! ```rust
//! use kernel_framebuffer::{Color, Framebuffer, Geometry};
//!
//! let geometry = Geometry::new(16, 8, 80).unwrap();
//! let mut memory = vec![0u8; geometry.span()];
//! let mut fb = Framebuffer::from_slice(&mut memory, geometry).unwrap();
//! fb.plot(1, 1, Color::RED);
//! fb.plot(16, 0, Color::RED); // ignored
//! assert_eq!(&memory[84..88], &Color::RED.to_cell());
//! ```

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

mod color;
mod error;
mod framebuffer;
mod geometry;
pub mod pattern;

pub use color::Color;
pub use error::FramebufferError;
pub use framebuffer::Framebuffer;
pub use geometry::Geometry;
pub use pattern::render_test_pattern;
