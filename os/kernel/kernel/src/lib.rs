//! # Kernel Bring-up
//!
//! Everything between the loader's jump to `_start` and the final halt:
//!
//! ```text
//! BootContext ──▶ bring_up::bring_up ──┬─ Ok  ──▶ test pattern on screen ──┐
//!                  (validate + render)  └─ Err ──▶ nothing drawn ───────────┴──▶ halt::halt
//! ```
//!
//! The binary target owns the Limine request statics and the entry symbol;
//! this library holds the parts that can be exercised on the host.

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

pub mod bring_up;
pub mod halt;
pub mod tracing;
