//! # Limine Requests
//!
//! The loader scans the kernel image for these structures between the start
//! and end markers and fills in their response pointers before jumping to
//! `_start`. They are `#[used]` and kept by the linker script, since the kernel
//! itself never reads the request fields, only the responses.

use kernel_info::boot::{
    BASE_REVISION, BaseRevisionStatus, BootContext, FramebufferInfo, FramebufferResponseInfo,
    HhdmInfo, KernelAddressInfo, MemoryMapInfo,
};
use limine::BaseRevision;
use limine::request::{
    FramebufferRequest, HhdmRequest, KernelAddressRequest, MemoryMapRequest, RequestsEndMarker,
    RequestsStartMarker,
};

#[used]
#[unsafe(link_section = ".requests_start_marker")]
static _START_MARKER: RequestsStartMarker = RequestsStartMarker::new();

/// Protocol revision handshake.
#[used]
#[unsafe(link_section = ".requests")]
static BASE_REVISION_TAG: BaseRevision = BaseRevision::with_revision(BASE_REVISION);

#[used]
#[unsafe(link_section = ".requests")]
static FRAMEBUFFER_REQUEST: FramebufferRequest = FramebufferRequest::new();

#[used]
#[unsafe(link_section = ".requests")]
static MEMORY_MAP_REQUEST: MemoryMapRequest = MemoryMapRequest::new();

/// Higher half direct map offset.
#[used]
#[unsafe(link_section = ".requests")]
static HHDM_REQUEST: HhdmRequest = HhdmRequest::new();

#[used]
#[unsafe(link_section = ".requests")]
static KERNEL_ADDRESS_REQUEST: KernelAddressRequest = KernelAddressRequest::new();

#[used]
#[unsafe(link_section = ".requests_end_marker")]
static _END_MARKER: RequestsEndMarker = RequestsEndMarker::new();

/// Copy the loader's responses into a [`BootContext`].
///
/// This is the only place that reads the request statics.
pub fn capture() -> BootContext {
    let base_revision = if BASE_REVISION_TAG.is_supported() {
        BaseRevisionStatus::accepted(BASE_REVISION)
    } else {
        BaseRevisionStatus::rejected(BASE_REVISION)
    };

    let framebuffer = FRAMEBUFFER_REQUEST
        .get_response()
        .map(|response| FramebufferResponseInfo {
            framebuffer_count: u64::try_from(response.framebuffers().count()).unwrap_or(u64::MAX),
            primary: response.framebuffers().next().map(|fb| FramebufferInfo {
                framebuffer_ptr: fb.addr().expose_provenance() as u64,
                framebuffer_width: fb.width(),
                framebuffer_height: fb.height(),
                framebuffer_pitch: fb.pitch(),
                framebuffer_bpp: fb.bpp(),
            }),
        });

    let memory_map = MEMORY_MAP_REQUEST
        .get_response()
        .map(|response| MemoryMapInfo {
            entries_ptr: response.entries().as_ptr().expose_provenance() as u64,
            entry_count: u64::try_from(response.entries().len()).unwrap_or(u64::MAX),
        });

    let kernel_address = KERNEL_ADDRESS_REQUEST
        .get_response()
        .map(|response| KernelAddressInfo {
            physical_base: response.physical_base(),
            virtual_base: response.virtual_base(),
        });

    let hhdm = HHDM_REQUEST.get_response().map(|response| HhdmInfo {
        offset: response.offset(),
    });

    BootContext {
        base_revision,
        framebuffer,
        memory_map,
        kernel_address,
        hhdm,
    }
}
