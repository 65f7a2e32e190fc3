use crate::FramebufferError;
use kernel_info::memory::BYTES_PER_PIXEL;

/// Shape of a linear 32 bpp framebuffer.
///
/// A `Geometry` always describes a non-empty surface whose scanlines fit their
/// pitch, and whose byte span can be computed without overflow.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Geometry {
    width: u32,
    height: u32,
    pitch: usize,
    span: usize,
}

impl Geometry {
    /// Validate a width/height (pixels) and pitch (bytes) triple.
    ///
    /// # Errors
    /// * [`FramebufferError::Empty`] if either dimension is zero.
    /// * [`FramebufferError::PitchTooSmall`] if a scanline of `width` pixels does not fit `pitch`.
    /// * [`FramebufferError::Overflow`] if the byte span is not representable.
    pub fn new(width: u32, height: u32, pitch: usize) -> Result<Self, FramebufferError> {
        if width == 0 || height == 0 {
            return Err(FramebufferError::Empty);
        }

        let row_bytes = (width as usize)
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or(FramebufferError::Overflow)?;
        if pitch < row_bytes {
            return Err(FramebufferError::PitchTooSmall { pitch, width });
        }

        // The last scanline only needs its visible part, not its padding.
        let span = ((height - 1) as usize)
            .checked_mul(pitch)
            .and_then(|rows| rows.checked_add(row_bytes))
            .ok_or(FramebufferError::Overflow)?;
        isize::try_from(span).map_err(|_| FramebufferError::Overflow)?;

        Ok(Self {
            width,
            height,
            pitch,
            span,
        })
    }

    /// Geometry of a tightly packed framebuffer (`pitch == width * 4`).
    ///
    /// # Errors
    /// See [`Geometry::new`].
    pub fn packed(width: u32, height: u32) -> Result<Self, FramebufferError> {
        let pitch = (width as usize)
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or(FramebufferError::Overflow)?;
        Self::new(width, height, pitch)
    }

    /// Visible width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Visible height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Bytes from the start of one scanline to the start of the next.
    #[must_use]
    pub const fn pitch(&self) -> usize {
        self.pitch
    }

    /// Number of bytes between the first and one past the last visible pixel.
    #[must_use]
    pub const fn span(&self) -> usize {
        self.span
    }

    /// Byte offset of pixel `(x, y)`, or `None` if it lies outside the surface.
    #[inline]
    pub(crate) const fn offset_of(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        // Cannot overflow: bounded by `span`, which was computed with checked arithmetic.
        Some(y as usize * self.pitch + x as usize * BYTES_PER_PIXEL)
    }
}
