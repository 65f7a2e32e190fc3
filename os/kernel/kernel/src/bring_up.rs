//! # Bring-up Sequence
//!
//! Validation followed by the framebuffer self-test. The caller decides what
//! to do with the outcome; in the kernel binary both paths end in
//! [`halt`](crate::halt::halt).

use kernel_framebuffer::{Framebuffer, render_test_pattern};
use kernel_handoff::{Handoff, HandoffError, validate};
use kernel_info::boot::BootContext;
use log::info;

/// Validate the handoff and, if it is usable, render the test pattern.
///
/// Nothing is written to video memory unless validation succeeds.
///
/// # Errors
/// The fatal [`HandoffError`] reported by [`validate`].
///
/// # Safety
/// If `ctx` describes a framebuffer, its memory must be mapped writable at the
/// reported address and not be accessed through any other path while this
/// function runs.
pub unsafe fn bring_up(ctx: &BootContext) -> Result<Handoff, HandoffError> {
    let handoff = validate(ctx)?;
    let descriptor = handoff.framebuffer;

    let address = usize::try_from(descriptor.address())
        .map_err(|_| kernel_framebuffer::FramebufferError::Overflow)?;
    let base = core::ptr::with_exposed_provenance_mut::<u8>(address);

    // SAFETY: the descriptor passed validation, so the span is non-null and
    // non-empty; mapping and exclusivity are the caller's contract.
    let mut fb = unsafe { Framebuffer::from_raw_parts(base, descriptor.geometry()) }?;
    render_test_pattern(&mut fb);
    info!(
        "self-test pattern drawn ({}x{})",
        fb.width(),
        fb.height()
    );

    Ok(handoff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel_framebuffer::Color;
    use kernel_handoff::Resource;
    use kernel_info::boot::{
        BASE_REVISION, BaseRevisionStatus, FramebufferInfo, FramebufferResponseInfo, HhdmInfo,
    };

    const POISON: u8 = 0x6B;

    struct Screen {
        memory: Vec<u8>,
        width: u32,
        height: u32,
        pitch: usize,
    }

    impl Screen {
        fn new(width: u32, height: u32, pitch: usize) -> Self {
            let span = (height as usize - 1) * pitch + width as usize * 4;
            Self {
                memory: vec![POISON; span],
                width,
                height,
                pitch,
            }
        }

        fn info(&mut self) -> FramebufferInfo {
            FramebufferInfo {
                framebuffer_ptr: self.memory.as_mut_ptr().expose_provenance() as u64,
                framebuffer_width: u64::from(self.width),
                framebuffer_height: u64::from(self.height),
                framebuffer_pitch: self.pitch as u64,
                framebuffer_bpp: 32,
            }
        }

        fn context(&mut self, revision: BaseRevisionStatus) -> BootContext {
            let mut ctx = BootContext::empty(revision);
            ctx.framebuffer = Some(FramebufferResponseInfo {
                framebuffer_count: 1,
                primary: Some(self.info()),
            });
            ctx
        }

        fn pixel(&self, x: u32, y: u32) -> Color {
            let offset = y as usize * self.pitch + x as usize * 4;
            Color::from_cell(self.memory[offset..offset + 4].try_into().unwrap())
        }

        fn untouched(&self) -> bool {
            self.memory.iter().all(|&b| b == POISON)
        }
    }

    #[test]
    fn draws_pattern_when_handoff_is_valid() {
        let mut screen = Screen::new(800, 600, 3200);
        let mut ctx = screen.context(BaseRevisionStatus::accepted(BASE_REVISION));
        ctx.hhdm = Some(HhdmInfo { offset: 0 });

        let handoff = unsafe { bring_up(&ctx) }.unwrap();
        assert!(handoff.require(Resource::DirectMap).is_ok());
        assert!(handoff.require(Resource::MemoryMap).is_err());

        assert_eq!(screen.pixel(0, 0), Color::WHITE);
        assert_eq!(screen.pixel(1, 1), Color::BLACK);
        assert_eq!(screen.pixel(55, 55), Color::RED);
        assert_eq!(screen.pixel(155, 55), Color::GREEN);
        assert_eq!(screen.pixel(799, 599), Color::WHITE);
    }

    #[test]
    fn unsupported_revision_leaves_memory_untouched() {
        let mut screen = Screen::new(320, 200, 1280);
        let ctx = screen.context(BaseRevisionStatus::rejected(BASE_REVISION));

        let err = unsafe { bring_up(&ctx) }.unwrap_err();
        assert_eq!(
            err,
            HandoffError::UnsupportedRevision {
                requested: BASE_REVISION
            }
        );
        assert!(screen.untouched());
    }

    #[test]
    fn missing_framebuffer_draws_nothing() {
        let mut screen = Screen::new(320, 200, 1280);

        let mut ctx = screen.context(BaseRevisionStatus::accepted(BASE_REVISION));
        ctx.framebuffer = None;
        assert_eq!(unsafe { bring_up(&ctx) }, Err(HandoffError::NoFramebuffer));

        let mut ctx = screen.context(BaseRevisionStatus::accepted(BASE_REVISION));
        if let Some(response) = ctx.framebuffer.as_mut() {
            response.framebuffer_count = 0;
        }
        assert_eq!(unsafe { bring_up(&ctx) }, Err(HandoffError::NoFramebuffer));

        assert!(screen.untouched());
    }

    #[test]
    fn padded_pitch_is_respected_end_to_end() {
        let mut screen = Screen::new(200, 150, 1024);
        let ctx = screen.context(BaseRevisionStatus::accepted(BASE_REVISION));
        unsafe { bring_up(&ctx) }.unwrap();

        // Second square is clipped at the right border column.
        assert_eq!(screen.pixel(160, 60), Color::GREEN);
        assert_eq!(screen.pixel(199, 60), Color::WHITE);
        for y in 0..149 {
            let padding = y * 1024 + 800..(y + 1) * 1024;
            assert!(screen.memory[padding].iter().all(|&b| b == POISON), "row {y}");
        }
    }
}
