//! # QEMU Debug Console
//!
//! Early-boot text output through QEMU's debug console (`-debugcon`), which
//! captures every byte written to I/O port `0x402`. The port needs no setup,
//! so it works from the first instruction of the kernel, long before any
//! serial driver or interrupt handling exists. On real hardware the port is
//! usually unclaimed and writes go nowhere.
//!
//! ```text
//! log::info!(..) ──▶ QemuLogger ──▶ qemu_trace! ──▶ QemuSink ──▶ out 0x402 ──▶ host
//! ```
//!
//! Capture it on the host with:
//!
//! ```bash
//! qemu-system-x86_64 -cdrom kernel.iso -debugcon stdio
//! ```
//!
//! ## Features
//! * `enabled` (default): port writes are compiled in.
//! * without `enabled`: [`qemu_trace!`] and the logger discard their output.
//!
//! ## Usage
//! ```rust,no_run
//! use kernel_qemu::QemuLogger;
//! use log::LevelFilter;
//!
//! static LOGGER: QemuLogger = QemuLogger::new(LevelFilter::Debug);
//!
//! LOGGER.install().expect("logger installed twice");
//! log::info!("hello from the kernel");
//! ```

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

mod logger;

pub use logger::QemuLogger;

#[cfg(feature = "enabled")]
#[doc(hidden)]
pub mod qemu_fmt {
    use core::fmt::{self, Write};

    /// The port number for QEMU's debug port.
    const QEMU_DEBUG_PORT: u16 = 0x402;

    /// Write a single byte to QEMU's debug port.
    #[allow(clippy::inline_always)]
    #[inline(always)]
    pub fn dbg_putc(c: u8) {
        #[cfg(target_arch = "x86_64")]
        unsafe {
            core::arch::asm!(
                "out dx, al",
                in("dx") QEMU_DEBUG_PORT,
                in("al") c,
                options(nomem, nostack, preserves_flags)
            );
        }

        #[cfg(not(target_arch = "x86_64"))]
        let _ = (QEMU_DEBUG_PORT, c);
    }

    pub struct QemuSink;

    impl Write for QemuSink {
        #[inline]
        fn write_str(&mut self, s: &str) -> fmt::Result {
            s.bytes().for_each(dbg_putc);
            Ok(())
        }
    }

    #[doc(hidden)]
    #[inline]
    pub fn qemu_write(args: fmt::Arguments) {
        // Best effort; there is nobody to report a failed write to.
        let _ = QemuSink.write_fmt(args);
    }
}

#[cfg(not(feature = "enabled"))]
#[doc(hidden)]
pub mod qemu_fmt {
    use core::fmt;

    #[doc(hidden)]
    #[inline(always)]
    #[allow(clippy::inline_always)]
    pub const fn qemu_write(_: fmt::Arguments) {}
}

/// Write formatted text to the QEMU debug console, bypassing the `log` facade.
#[macro_export]
macro_rules! qemu_trace {
    ($($arg:tt)*) => {{
        $crate::qemu_fmt::qemu_write(core::format_args!($($arg)*));
    }};
}
