//! # Kernel Tracing helpers

use kernel_handoff::Handoff;
use kernel_info::boot::BootContext;
use log::{info, warn};

pub fn trace_boot_context(ctx: &BootContext) {
    info!(
        "Base revision {} {}",
        ctx.base_revision.requested,
        if ctx.base_revision.accepted {
            "accepted"
        } else {
            "rejected"
        }
    );

    match &ctx.framebuffer {
        Some(response) => match &response.primary {
            Some(fb) => info!(
                "FB count = {}, ptr = {:#018x}, width = {}, height = {}, pitch = {}, bpp = {}",
                response.framebuffer_count,
                fb.framebuffer_ptr,
                fb.framebuffer_width,
                fb.framebuffer_height,
                fb.framebuffer_pitch,
                fb.framebuffer_bpp
            ),
            None => warn!("FB response lists no framebuffers"),
        },
        None => warn!("FB response missing"),
    }
}

/// Report the resources later subsystems will consume.
///
/// Nothing here interprets them; memory management, relocation and the
/// direct map are not set up at this stage.
pub fn trace_resources(ctx: &BootContext, handoff: &Handoff) {
    if let Some(mmap) = &ctx.memory_map {
        info!(
            "MMAP entries = {}, array at {:#018x}",
            mmap.entry_count, mmap.entries_ptr
        );
    }
    if let Some(kernel) = &ctx.kernel_address {
        info!(
            "Kernel phys base = {:#018x}, virt base = {:#018x}",
            kernel.physical_base, kernel.virtual_base
        );
    }
    if let Some(hhdm) = &ctx.hhdm {
        info!("HHDM offset = {:#018x}", hhdm.offset);
    }
    if !handoff.missing.is_empty() {
        warn!(
            "{} optional response(s) missing",
            handoff.missing.into_bits().count_ones()
        );
    }
}
