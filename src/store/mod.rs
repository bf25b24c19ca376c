//! Strain storage.
//!
//! A `StrainStore` is a keyed collection of strains with product-name
//! uniqueness. Two interchangeable variants exist: a transient in-memory map
//! and a map mirrored to a YAML file. Every operation holds the store lock for
//! its full duration.

mod map;
mod memory;
mod yaml_file;

pub use memory::*;
pub use yaml_file::*;

use std::sync::Arc;

use crate::config::{Config, StorageMode};
use crate::errors::AppError;
use crate::models::Strain;

/// Capability set shared by all strain stores.
pub trait StrainStore: Send + Sync {
    /// Insert a strain keyed by its product name.
    ///
    /// Fails with [`AppError::AlreadyExists`] without touching the store when
    /// the name is taken.
    fn add_strain(&self, strain: Strain) -> Result<(), AppError>;

    /// All strains, in no particular order.
    fn get_strains(&self) -> Vec<Strain>;

    /// Exact-match lookup by product name.
    fn find_strain_by_name(&self, name: &str) -> Result<Strain, AppError>;

    /// Number of stored strains.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Open the store selected by the configured storage mode.
pub fn open_store(config: &Config) -> Result<Arc<dyn StrainStore>, AppError> {
    tracing::info!("Opening strain store: {}", config.storage_mode.as_str());
    match config.storage_mode {
        StorageMode::InMemory => Ok(Arc::new(InMemoryStrainStore::new())),
        StorageMode::YmlFile => {
            let store = YamlFileStrainStore::open(config.strains_path())?;
            tracing::info!("Strain file: {:?}", store.path());
            Ok(Arc::new(store))
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::test_strain;
    use super::*;
    use tempfile::TempDir;

    fn check_add_strain(store: &dyn StrainStore) {
        let strain = test_strain("Test Strain");

        store.add_strain(strain.clone()).unwrap();

        let err = store.add_strain(strain).unwrap_err();
        assert!(matches!(err, AppError::AlreadyExists(ref name) if name == "Test Strain"));
        assert_eq!(store.get_strains().len(), 1);
    }

    fn check_get_strains(store: &dyn StrainStore) {
        assert!(store.get_strains().is_empty());
        assert!(store.is_empty());

        store.add_strain(test_strain("Strain 1")).unwrap();
        store.add_strain(test_strain("Strain 2")).unwrap();

        let mut names: Vec<String> = store.get_strains().into_iter().map(|s| s.name).collect();
        names.sort();
        assert_eq!(names, vec!["Strain 1", "Strain 2"]);
        assert_eq!(store.len(), 2);
    }

    fn check_find_strain_by_name(store: &dyn StrainStore) {
        let strain = test_strain("Test Strain");

        let err = store.find_strain_by_name("Test Strain").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        store.add_strain(strain.clone()).unwrap();
        assert_eq!(store.find_strain_by_name("Test Strain").unwrap(), strain);
        // Lookup is exact, not case-insensitive.
        assert!(store.find_strain_by_name("test strain").is_err());
    }

    fn yaml_store(dir: &TempDir) -> YamlFileStrainStore {
        YamlFileStrainStore::open(dir.path().join("strains.yml")).unwrap()
    }

    #[test]
    fn test_in_memory_store() {
        check_add_strain(&InMemoryStrainStore::new());
        check_get_strains(&InMemoryStrainStore::new());
        check_find_strain_by_name(&InMemoryStrainStore::new());
    }

    #[test]
    fn test_yaml_file_store() {
        let dir = TempDir::new().unwrap();
        check_add_strain(&yaml_store(&dir));

        let dir = TempDir::new().unwrap();
        check_get_strains(&yaml_store(&dir));

        let dir = TempDir::new().unwrap();
        check_find_strain_by_name(&yaml_store(&dir));
    }

    #[test]
    fn test_open_store_selects_variant() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::from_lookup(|_| None).unwrap();
        config.wits_dir = dir.path().join("wits");

        config.storage_mode = StorageMode::InMemory;
        let store = open_store(&config).unwrap();
        store.add_strain(test_strain("Memory Only")).unwrap();
        assert!(!config.strains_path().exists());

        config.storage_mode = StorageMode::YmlFile;
        let store = open_store(&config).unwrap();
        store.add_strain(test_strain("On Disk")).unwrap();
        assert!(config.strains_path().exists());
    }
}
