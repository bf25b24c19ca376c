//! Transient strain store; contents die with the process.

use parking_lot::Mutex;

use super::map::StrainMap;
use super::StrainStore;
use crate::errors::AppError;
use crate::models::Strain;

/// In-memory strain store keyed by product name.
#[derive(Default)]
pub struct InMemoryStrainStore {
    strains: Mutex<StrainMap>,
}

impl InMemoryStrainStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StrainStore for InMemoryStrainStore {
    fn add_strain(&self, strain: Strain) -> Result<(), AppError> {
        tracing::debug!("add_strain: {} ({})", strain.name, strain.id);
        let mut strains = self.strains.lock();
        strains.insert(strain)?;

        tracing::debug!("add_strain -> {} strains", strains.len());
        Ok(())
    }

    fn get_strains(&self) -> Vec<Strain> {
        self.strains.lock().all()
    }

    fn find_strain_by_name(&self, name: &str) -> Result<Strain, AppError> {
        self.strains.lock().find(name)
    }

    fn len(&self) -> usize {
        self.strains.lock().len()
    }
}
