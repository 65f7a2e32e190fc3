use crate::Resource;
use kernel_framebuffer::FramebufferError;

/// Why the loader's handoff cannot be used.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandoffError {
    /// The loader did not acknowledge the requested base revision.
    #[error("loader does not support base revision {requested}")]
    UnsupportedRevision { requested: u64 },

    /// No framebuffer response, or a response listing zero framebuffers.
    #[error("no framebuffer was provided")]
    NoFramebuffer,

    /// The first framebuffer cannot be drawn to.
    #[error("framebuffer is unusable: {0}")]
    MalformedFramebuffer(#[from] FramebufferError),

    /// A resource the caller depends on was not provided.
    #[error("{0} response is missing")]
    MissingOptionalResource(Resource),
}

impl HandoffError {
    /// Whether bring-up has to stop.
    ///
    /// Missing optional resources only become fatal once something consumes them.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::MissingOptionalResource(_))
    }
}
