use bitfield_struct::bitfield;
use core::fmt;

/// Boot resources the kernel asks for but can start without.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Resource {
    MemoryMap,
    KernelAddress,
    DirectMap,
}

impl Resource {
    pub const ALL: [Self; 3] = [Self::MemoryMap, Self::KernelAddress, Self::DirectMap];
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MemoryMap => "memory map",
            Self::KernelAddress => "kernel address",
            Self::DirectMap => "direct map",
        })
    }
}

/// Set of [`Resource`]s the loader did not answer.
#[bitfield(u8)]
#[derive(PartialEq, Eq)]
pub struct MissingResources {
    /// Bit 0: memory map response absent.
    pub memory_map: bool,

    /// Bit 1: kernel address response absent.
    pub kernel_address: bool,

    /// Bit 2: HHDM response absent.
    pub direct_map: bool,

    /// Bits 3-7: unused.
    #[bits(5, default = 0)]
    _reserved: u8,
}

impl MissingResources {
    #[must_use]
    pub const fn contains(&self, resource: Resource) -> bool {
        match resource {
            Resource::MemoryMap => self.memory_map(),
            Resource::KernelAddress => self.kernel_address(),
            Resource::DirectMap => self.direct_map(),
        }
    }

    #[must_use]
    pub const fn with(self, resource: Resource) -> Self {
        match resource {
            Resource::MemoryMap => self.with_memory_map(true),
            Resource::KernelAddress => self.with_kernel_address(true),
            Resource::DirectMap => self.with_direct_map(true),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.into_bits() == 0
    }

    /// The missing resources, in declaration order.
    pub fn resources(self) -> impl Iterator<Item = Resource> {
        Resource::ALL.into_iter().filter(move |r| self.contains(*r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let missing = MissingResources::new();
        assert!(missing.is_empty());
        assert_eq!(missing.resources().count(), 0);
    }

    #[test]
    fn tracks_each_resource() {
        let missing = MissingResources::new()
            .with(Resource::MemoryMap)
            .with(Resource::DirectMap);
        assert!(missing.contains(Resource::MemoryMap));
        assert!(!missing.contains(Resource::KernelAddress));
        assert!(missing.contains(Resource::DirectMap));
        assert_eq!(missing.into_bits(), 0b101);

        let listed: Vec<_> = missing.resources().collect();
        assert_eq!(listed, [Resource::MemoryMap, Resource::DirectMap]);
    }
}
