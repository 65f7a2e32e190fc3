use crate::{HandoffError, MissingResources, Resource};
use kernel_framebuffer::{FramebufferError, Geometry};
use kernel_info::boot::{BASE_REVISION, BootContext, FramebufferInfo};
use kernel_info::memory::BITS_PER_PIXEL;
use log::{debug, warn};

/// A framebuffer that passed validation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FramebufferDescriptor {
    address: u64,
    geometry: Geometry,
}

impl FramebufferDescriptor {
    /// Base address of the first visible pixel. Never zero.
    #[must_use]
    pub const fn address(&self) -> u64 {
        self.address
    }

    #[must_use]
    pub const fn geometry(&self) -> Geometry {
        self.geometry
    }
}

impl TryFrom<&FramebufferInfo> for FramebufferDescriptor {
    type Error = FramebufferError;

    fn try_from(info: &FramebufferInfo) -> Result<Self, Self::Error> {
        if info.framebuffer_ptr == 0 {
            return Err(FramebufferError::NullBase);
        }
        if info.framebuffer_bpp != BITS_PER_PIXEL {
            return Err(FramebufferError::UnsupportedDepth(info.framebuffer_bpp));
        }

        let width = u32::try_from(info.framebuffer_width).map_err(|_| FramebufferError::Overflow)?;
        let height =
            u32::try_from(info.framebuffer_height).map_err(|_| FramebufferError::Overflow)?;
        let pitch =
            usize::try_from(info.framebuffer_pitch).map_err(|_| FramebufferError::Overflow)?;
        let geometry = Geometry::new(width, height, pitch)?;

        let span = u64::try_from(geometry.span()).map_err(|_| FramebufferError::Overflow)?;
        info.framebuffer_ptr
            .checked_add(span)
            .ok_or(FramebufferError::Overflow)?;

        Ok(Self {
            address: info.framebuffer_ptr,
            geometry,
        })
    }
}

/// A handoff that is good enough to continue bring-up.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Handoff {
    /// The first framebuffer the loader reported.
    pub framebuffer: FramebufferDescriptor,

    /// Optional responses the loader left empty.
    pub missing: MissingResources,
}

impl Handoff {
    /// Fail with [`HandoffError::MissingOptionalResource`] if `resource` was not provided.
    ///
    /// # Errors
    /// Returns the error if the loader left the corresponding response empty.
    pub const fn require(&self, resource: Resource) -> Result<(), HandoffError> {
        if self.missing.contains(resource) {
            Err(HandoffError::MissingOptionalResource(resource))
        } else {
            Ok(())
        }
    }
}

/// Check the loader's responses in protocol order.
///
/// 1. The base revision must have been acknowledged.
/// 2. A framebuffer response listing at least one framebuffer must exist,
///    and its first framebuffer must be a well-formed 32 bpp surface.
/// 3. Memory map, kernel address and HHDM responses are recorded as missing
///    if absent; this does not fail validation.
///
/// Only reads `ctx`; never touches loader-owned memory.
///
/// # Errors
/// The first fatal [`HandoffError`] encountered.
pub fn validate(ctx: &BootContext) -> Result<Handoff, HandoffError> {
    let revision = ctx.base_revision;
    if !revision.accepted || revision.requested != BASE_REVISION {
        return Err(HandoffError::UnsupportedRevision {
            requested: revision.requested,
        });
    }

    let info = ctx
        .framebuffer
        .as_ref()
        .filter(|response| response.framebuffer_count > 0)
        .and_then(|response| response.primary.as_ref())
        .ok_or(HandoffError::NoFramebuffer)?;
    let framebuffer = FramebufferDescriptor::try_from(info)?;
    debug!(
        "framebuffer at {:#018x}: {}x{}, pitch {}",
        framebuffer.address(),
        framebuffer.geometry().width(),
        framebuffer.geometry().height(),
        framebuffer.geometry().pitch()
    );

    let mut missing = MissingResources::new();
    if ctx.memory_map.is_none() {
        missing = missing.with(Resource::MemoryMap);
    }
    if ctx.kernel_address.is_none() {
        missing = missing.with(Resource::KernelAddress);
    }
    if ctx.hhdm.is_none() {
        missing = missing.with(Resource::DirectMap);
    }
    for resource in missing.resources() {
        warn!("loader did not provide the {resource} response");
    }

    Ok(Handoff {
        framebuffer,
        missing,
    })
}
