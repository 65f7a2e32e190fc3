//! # Boot Handoff Validation
//!
//! Decides whether what the loader handed over is enough to continue.
//!
//! [`validate`] takes the immutable [`BootContext`](kernel_info::boot::BootContext)
//! captured at entry and returns either a [`Handoff`] carrying a checked
//! [`FramebufferDescriptor`], or the first fatal [`HandoffError`]:
//!
//! | Condition                                  | Result                                 |
//! |--------------------------------------------|----------------------------------------|
//! | base revision not acknowledged             | [`HandoffError::UnsupportedRevision`]  |
//! | no framebuffer response / zero framebuffers| [`HandoffError::NoFramebuffer`]        |
//! | first framebuffer not a sane 32 bpp surface| [`HandoffError::MalformedFramebuffer`] |
//! | memory map, kernel address or HHDM absent  | recorded in [`MissingResources`]       |
//!
//! Missing optional responses do not stop bring-up. A later consumer asks
//! [`Handoff::require`] and gets [`HandoffError::MissingOptionalResource`]
//! instead of dereferencing data that was never there.

#![cfg_attr(not(any(test, doctest)), no_std)]
#![deny(unsafe_code)]

mod error;
mod resources;
mod validate;

pub use error::HandoffError;
pub use resources::{MissingResources, Resource};
pub use validate::{FramebufferDescriptor, Handoff, validate};
