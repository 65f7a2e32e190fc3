//! # Kernel Boot Information

/// Limine base revision requested by the kernel.
///
/// The loader acknowledges the request by zeroing the revision field of the
/// base revision tag; if it leaves it untouched the revision is unsupported.
pub const BASE_REVISION: u64 = 2;

/// Snapshot of everything the loader handed over.
///
/// Built exactly once at entry from the Limine response slots and never
/// mutated afterwards. Every later stage receives it by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootContext {
    /// Outcome of the base revision negotiation.
    pub base_revision: BaseRevisionStatus,

    /// Framebuffer response, `None` if the loader left the slot empty.
    pub framebuffer: Option<FramebufferResponseInfo>,

    /// Memory map response, `None` if the loader left the slot empty.
    pub memory_map: Option<MemoryMapInfo>,

    /// Kernel address response, `None` if the loader left the slot empty.
    pub kernel_address: Option<KernelAddressInfo>,

    /// Higher half direct map response, `None` if the loader left the slot empty.
    pub hhdm: Option<HhdmInfo>,
}

impl BootContext {
    /// A context in which the loader accepted the given revision but answered no request.
    #[must_use]
    pub const fn empty(base_revision: BaseRevisionStatus) -> Self {
        Self {
            base_revision,
            framebuffer: None,
            memory_map: None,
            kernel_address: None,
            hhdm: None,
        }
    }
}

/// Result of the base revision handshake.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BaseRevisionStatus {
    /// The revision the kernel asked for.
    pub requested: u64,

    /// Whether the loader acknowledged the request.
    pub accepted: bool,
}

impl BaseRevisionStatus {
    #[must_use]
    pub const fn accepted(requested: u64) -> Self {
        Self {
            requested,
            accepted: true,
        }
    }

    #[must_use]
    pub const fn rejected(requested: u64) -> Self {
        Self {
            requested,
            accepted: false,
        }
    }
}

/// The framebuffer response as reported by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramebufferResponseInfo {
    /// Number of framebuffers the loader reported.
    pub framebuffer_count: u64,

    /// The first reported framebuffer, if any.
    pub primary: Option<FramebufferInfo>,
}

/// One linear framebuffer, unvalidated.
///
/// Field widths follow the Limine ABI so the values can be copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramebufferInfo {
    /// Linear framebuffer base address (virtual, inside the HHDM). Already mapped writable.
    pub framebuffer_ptr: u64,

    /// Visible width in **pixels**.
    pub framebuffer_width: u64,

    /// Visible height in **pixels**.
    pub framebuffer_height: u64,

    /// Bytes per scanline (a.k.a. pitch). May be > `width * 4` due to padding.
    pub framebuffer_pitch: u64,

    /// Bits per pixel.
    pub framebuffer_bpp: u16,
}

/// The memory map response. Carried onward, not parsed here.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MemoryMapInfo {
    /// Address of the loader's array of entry pointers.
    pub entries_ptr: u64,

    /// Number of entries in the map.
    pub entry_count: u64,
}

/// Where the loader placed the kernel image.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct KernelAddressInfo {
    pub physical_base: u64,
    pub virtual_base: u64,
}

/// The higher half direct map.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HhdmInfo {
    /// Add this to a physical address to obtain its direct-mapped virtual address.
    pub offset: u64,
}

impl HhdmInfo {
    /// Translate a physical address through the direct map.
    #[must_use]
    pub const fn phys_to_virt(&self, pa: u64) -> u64 {
        self.offset.wrapping_add(pa)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_context_has_no_responses() {
        let ctx = BootContext::empty(BaseRevisionStatus::accepted(BASE_REVISION));
        assert!(ctx.base_revision.accepted);
        assert_eq!(ctx.base_revision.requested, BASE_REVISION);
        assert!(ctx.framebuffer.is_none());
        assert!(ctx.memory_map.is_none());
        assert!(ctx.kernel_address.is_none());
        assert!(ctx.hhdm.is_none());
    }

    #[test]
    fn hhdm_translation_adds_offset() {
        let hhdm = HhdmInfo {
            offset: 0xffff_8000_0000_0000,
        };
        assert_eq!(hhdm.phys_to_virt(0x1000), 0xffff_8000_0000_1000);
    }
}
