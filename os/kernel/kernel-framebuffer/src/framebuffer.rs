use crate::{Color, FramebufferError, Geometry};
use core::marker::PhantomData;
use core::ptr::NonNull;

/// Exclusive, bounds-checked access to a linear 32 bpp framebuffer.
///
/// This is the only place that turns pixel coordinates into memory
/// addresses. Every write goes through [`Framebuffer::plot`], which drops
/// coordinates outside `[0, width) × [0, height)`.
#[derive(Debug)]
pub struct Framebuffer<'a> {
    base: NonNull<u8>,
    geometry: Geometry,
    _memory: PhantomData<&'a mut [u8]>,
}

impl<'a> Framebuffer<'a> {
    /// Draw into ordinary memory, e.g. a back buffer.
    ///
    /// # Errors
    /// [`FramebufferError::TooSmall`] if `memory` is shorter than the geometry's span.
    pub fn from_slice(memory: &'a mut [u8], geometry: Geometry) -> Result<Self, FramebufferError> {
        if memory.len() < geometry.span() {
            return Err(FramebufferError::TooSmall {
                len: memory.len(),
                required: geometry.span(),
            });
        }

        Ok(Self {
            base: NonNull::from(memory).cast(),
            geometry,
            _memory: PhantomData,
        })
    }

    /// Draw into device memory handed over by the loader.
    ///
    /// # Errors
    /// [`FramebufferError::NullBase`] if `base` is null.
    ///
    /// # Safety
    /// `base .. base + geometry.span()` must be mapped, writable, and not
    /// accessed through any other path for `'a`.
    pub unsafe fn from_raw_parts(base: *mut u8, geometry: Geometry) -> Result<Self, FramebufferError> {
        let base = NonNull::new(base).ok_or(FramebufferError::NullBase)?;
        Ok(Self {
            base,
            geometry,
            _memory: PhantomData,
        })
    }

    #[must_use]
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.geometry.width()
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.geometry.height()
    }

    /// Write `color` at `(x, y)`. Out-of-range coordinates are ignored.
    #[inline]
    pub fn plot(&mut self, x: u32, y: u32, color: Color) {
        let Some(offset) = self.geometry.offset_of(x, y) else {
            return;
        };

        // SAFETY: `offset + 4 <= span`, and the constructors guarantee the
        // whole span is writable for 'a. `[u8; 4]` has alignment 1, so the
        // cell may start on any byte; it is still written as one store.
        unsafe {
            self.base
                .add(offset)
                .cast::<[u8; 4]>()
                .write_volatile(color.to_cell());
        }
    }

    /// Fill the rectangle at `(x, y)` of `width × height` pixels, clipped to the surface.
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color) {
        let x_end = x.saturating_add(width).min(self.width());
        let y_end = y.saturating_add(height).min(self.height());

        for py in y..y_end {
            for px in x..x_end {
                self.plot(px, py, color);
            }
        }
    }

    /// Set every visible pixel to `color`.
    pub fn clear(&mut self, color: Color) {
        self.fill_rect(0, 0, self.width(), self.height(), color);
    }

    /// Draw a one pixel frame along all four edges.
    pub fn draw_border(&mut self, color: Color) {
        let (width, height) = (self.width(), self.height());
        let (right, bottom) = (width - 1, height - 1);

        for x in 0..width {
            self.plot(x, 0, color);
            self.plot(x, bottom, color);
        }
        for y in 0..height {
            self.plot(0, y, color);
            self.plot(right, y, color);
        }
    }
}
