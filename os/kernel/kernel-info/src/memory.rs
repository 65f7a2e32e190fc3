//! # Memory Layout

/// Where the kernel executes (VMA), matches the linker script.
///
/// # Kernel Build
/// This information is sourced in the kernel's `build.rs` to configure
/// the linker. Limine maps the image here and reports the physical base
/// through the kernel address response.
pub const KERNEL_BASE: u64 = 0xffff_ffff_8000_0000;

/// Bytes per framebuffer pixel. The kernel only drives 32-bit linear framebuffers.
pub const BYTES_PER_PIXEL: usize = 4;

/// Bits per framebuffer pixel, as reported by the loader.
pub const BITS_PER_PIXEL: u16 = 32;

const _: () = {
    assert!(KERNEL_BASE.is_multiple_of(1 << 21));
    assert!(BYTES_PER_PIXEL * 8 == BITS_PER_PIXEL as usize);
};
