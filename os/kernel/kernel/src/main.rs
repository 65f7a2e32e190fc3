//! # Kernel Entry Point

#![cfg_attr(target_os = "none", no_std, no_main)]
#![allow(unsafe_code)]

#[cfg(target_os = "none")]
mod requests;

#[cfg(target_os = "none")]
mod entry {
    use crate::requests;
    use kernel::bring_up::bring_up;
    use kernel::halt::halt;
    use kernel::tracing::{trace_boot_context, trace_resources};
    use kernel_info::boot::BootContext;
    use kernel_qemu::QemuLogger;
    use log::{LevelFilter, error, info};

    static LOGGER: QemuLogger = QemuLogger::new(LevelFilter::Trace);

    #[panic_handler]
    fn panic(info: &core::panic::PanicInfo) -> ! {
        error!("{info}");
        halt()
    }

    /// The kernel entry point.
    ///
    /// # Limine Interaction
    /// The loader jumps here in 64-bit long mode with interrupts disabled,
    /// on a loader-provided stack, after filling in the request responses.
    /// There are no arguments; everything arrives through [`requests`].
    #[unsafe(no_mangle)]
    extern "C" fn _start() -> ! {
        #[cfg(feature = "qemu")]
        kernel_qemu::qemu_trace!("Kernel reporting to QEMU!\n");

        // A second install can only happen if `_start` is re-entered.
        let _ = LOGGER.install();

        let ctx = requests::capture();
        kernel_main(&ctx)
    }

    fn kernel_main(ctx: &BootContext) -> ! {
        trace_boot_context(ctx);

        // SAFETY: Limine maps the framebuffer writable inside the HHDM, and
        // nothing else in the kernel touches it.
        match unsafe { bring_up(ctx) } {
            Ok(handoff) => {
                trace_resources(ctx, &handoff);
                info!("Bring-up complete, halting");
            }
            Err(err) => error!("Bring-up failed: {err}"),
        }

        halt()
    }
}

/// The kernel only runs on bare metal (`x86_64-unknown-none`). Host builds
/// produce an inert binary so the workspace builds and tests natively.
#[cfg(not(target_os = "none"))]
fn main() {}
