/// Why a memory span cannot back a [`Framebuffer`](crate::Framebuffer).
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FramebufferError {
    #[error("framebuffer base address is null")]
    NullBase,
    #[error("framebuffer has zero width or height")]
    Empty,
    #[error("pitch of {pitch} bytes cannot hold a scanline of {width} pixels")]
    PitchTooSmall { pitch: usize, width: u32 },
    #[error("framebuffer span does not fit the address space")]
    Overflow,
    #[error("buffer of {len} bytes is smaller than the {required} byte framebuffer span")]
    TooSmall { len: usize, required: usize },
    #[error("unsupported pixel depth of {0} bits")]
    UnsupportedDepth(u16),
}
