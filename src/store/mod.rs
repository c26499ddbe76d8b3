pub mod supplications;

use crate::domain::SupplicationRecord;

pub use supplications::SUPPLICATIONS;

/// Read-only access to the supplication table.
pub trait ContentStore {
    fn supplications(&self) -> &[SupplicationRecord];

    fn supplication(&self, id: u32) -> Option<&SupplicationRecord> {
        self.supplications().iter().find(|r| r.id == id)
    }
}

/// The process-wide table compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticContentStore;

impl ContentStore for StaticContentStore {
    fn supplications(&self) -> &[SupplicationRecord] {
        SUPPLICATIONS
    }
}
