//! Strain service, the façade the navigation layer talks to.
//!
//! Forwards to whichever [`StrainStore`] was configured at startup, so screens
//! never depend on the storage backend.

use std::sync::Arc;

use crate::errors::AppError;
use crate::models::Strain;
use crate::store::StrainStore;

/// Operations on strains, backed by a store.
#[derive(Clone)]
pub struct StrainService {
    store: Arc<dyn StrainStore>,
}

impl StrainService {
    pub fn new(store: Arc<dyn StrainStore>) -> Self {
        if store.is_empty() {
            tracing::info!("StrainService over an empty store");
        } else {
            tracing::debug!("StrainService over {} stored strains", store.len());
        }
        Self { store }
    }

    /// Add a strain to the store.
    pub fn add_strain(&self, strain: Strain) -> Result<(), AppError> {
        tracing::debug!("StrainService::add_strain {:?}", strain.name);
        self.store.add_strain(strain)
    }

    /// Retrieve all strains from the store.
    pub fn get_strains(&self) -> Vec<Strain> {
        tracing::debug!("StrainService::get_strains");
        self.store.get_strains()
    }

    /// Look up a strain by its product name.
    pub fn find_strain_by_name(&self, name: &str) -> Result<Strain, AppError> {
        tracing::debug!("StrainService::find_strain_by_name {:?}", name);
        self.store.find_strain_by_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::test_strain;
    use crate::store::InMemoryStrainStore;

    fn service() -> StrainService {
        StrainService::new(Arc::new(InMemoryStrainStore::new()))
    }

    #[test]
    fn test_add_then_find() {
        let service = service();
        let strain = test_strain("Test Strain");

        service.add_strain(strain.clone()).unwrap();
        assert_eq!(service.find_strain_by_name("Test Strain").unwrap(), strain);
    }

    #[test]
    fn test_errors_pass_through_unchanged() {
        let service = service();
        service.add_strain(test_strain("Test Strain")).unwrap();

        assert_eq!(
            service.add_strain(test_strain("Test Strain")).unwrap_err(),
            AppError::AlreadyExists("Test Strain".to_string())
        );
        assert_eq!(
            service.find_strain_by_name("Missing").unwrap_err(),
            AppError::NotFound("Missing".to_string())
        );
        assert_eq!(service.get_strains().len(), 1);
    }

    #[test]
    fn test_clones_share_the_store() {
        let service = service();
        let other = service.clone();
        service.add_strain(test_strain("Shared")).unwrap();
        assert_eq!(other.get_strains().len(), 1);
    }
}
