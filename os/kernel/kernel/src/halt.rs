//! # Halt Policy
//!
//! The terminal state of the kernel, reached after a successful self-test as
//! well as after any fatal handoff error.

/// Park this core forever.
///
/// Interrupts are masked before every halt, so only an NMI or a reset can
/// wake the core, and the loop puts it straight back to sleep.
pub fn halt() -> ! {
    loop {
        wait_for_interrupt();
    }
}

#[allow(clippy::inline_always)]
#[inline(always)]
fn wait_for_interrupt() {
    #[cfg(target_arch = "x86_64")]
    unsafe {
        core::arch::asm!("cli", "hlt", options(nomem, nostack));
    }

    #[cfg(any(target_arch = "aarch64", target_arch = "riscv64"))]
    unsafe {
        core::arch::asm!("wfi", options(nomem, nostack, preserves_flags));
    }

    #[cfg(not(any(
        target_arch = "x86_64",
        target_arch = "aarch64",
        target_arch = "riscv64"
    )))]
    core::hint::spin_loop();
}
