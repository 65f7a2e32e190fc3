//! # Kernel Configuration and Boot Interface
//!
//! Data the kernel receives from the boot loader, and the compile-time layout
//! constants shared between the kernel, its build script and its linker script.
//!
//! ## Boot Protocol
//!
//! The kernel is loaded by a [Limine](https://github.com/limine-bootloader/limine)
//! compatible loader. The loader scans the kernel image for request structures,
//! fills in their response slots and then jumps to the entry symbol without
//! arguments. The kernel copies whatever it finds into a [`BootContext`](boot::BootContext)
//! right away and threads that value through the rest of bring-up:
//!
//! ```text
//! .requests section ──(loader fills responses)──▶ BootContext ──▶ validation ──▶ rendering
//! ```
//!
//! The context is plain data: it does not know about the `limine` crate and
//! performs no pointer dereferences, so it can be constructed freely in tests.
//!
//! ## Memory Layout
//!
//! ```text
//! HHDM offset + pa      ┌─────────────────────────────────┐
//!                       │   Higher Half Direct Mapping    │
//!                       │   (framebuffer lives in here)   │
//! KERNEL_BASE           ├─────────────────────────────────┤ 0xffff_ffff_8000_0000
//!                       │       Kernel Text & Data        │
//! 0xFFFF_FFFF_FFFF_FFFF └─────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use kernel_info::boot::{BASE_REVISION, BaseRevisionStatus, BootContext, HhdmInfo};
//!
//! let mut ctx = BootContext::empty(BaseRevisionStatus::accepted(BASE_REVISION));
//! ctx.hhdm = Some(HhdmInfo { offset: 0xffff_8000_0000_0000 });
//! assert!(ctx.framebuffer.is_none());
//! ```

#![cfg_attr(not(any(test, doctest)), no_std)]
#![deny(unsafe_code)]

pub mod boot;
pub mod memory;
