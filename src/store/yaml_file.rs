//! YAML file strain store.
//!
//! The whole collection is one YAML mapping from product name to strain. The
//! file is rewritten on every successful add; memory only changes after the
//! write went through.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::map::StrainMap;
use super::StrainStore;
use crate::errors::AppError;
use crate::models::Strain;

/// Strain store mirrored to a YAML file.
pub struct YamlFileStrainStore {
    path: PathBuf,
    strains: Mutex<StrainMap>,
}

impl YamlFileStrainStore {
    /// Open the store backed by `path`, creating its parent directory.
    ///
    /// A missing file yields an empty store. An unreadable file also yields
    /// an empty store; a corrupt one is first moved aside to
    /// `<name>.corrupt`. Both cases log a warning.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let strains = load_strains(&path);
        tracing::info!(
            "Opened strain file {:?} with {} strains",
            path,
            strains.len()
        );

        Ok(Self {
            path,
            strains: Mutex::new(strains),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StrainStore for YamlFileStrainStore {
    fn add_strain(&self, strain: Strain) -> Result<(), AppError> {
        tracing::debug!("add_strain: {} ({})", strain.name, strain.id);
        let mut strains = self.strains.lock();

        let mut next = strains.clone();
        next.insert(strain)?;
        write_strains(&self.path, &next)?;
        *strains = next;

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

/// Where a corrupt strain file is moved before the store starts empty.
fn corrupt_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".corrupt");
    path.with_file_name(name)
}

fn load_strains(path: &Path) -> StrainMap {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("Strain file {:?} does not exist yet, starting empty", path);
            return StrainMap::default();
        }
        Err(e) => {
            tracing::warn!("Failed to read strain file {:?}: {}. Starting empty", path, e);
            return StrainMap::default();
        }
    };

    if data.trim().is_empty() {
        return StrainMap::default();
    }

    match serde_yaml::from_str::<BTreeMap<String, Strain>>(&data) {
        // Re-key by name so the uniqueness invariant holds even for hand-edited files.
        Ok(strains) => StrainMap::from_strains(strains.into_values()),
        Err(e) => {
            let aside = corrupt_path(path);
            match fs::rename(path, &aside) {
                Ok(()) => tracing::warn!(
                    "Failed to parse strain file {:?}: {}. Moved it to {:?}, starting empty",
                    path,
                    e,
                    aside
                ),
                Err(rename_err) => tracing::warn!(
                    "Failed to parse strain file {:?}: {}. Could not move it aside: {}. Starting empty",
                    path,
                    e,
                    rename_err
                ),
            }
            StrainMap::default()
        }
    }
}

fn write_strains(path: &Path, strains: &StrainMap) -> Result<(), AppError> {
    let data = serde_yaml::to_string(strains)?;

    let tmp_path = path.with_extension("yml.tmp");
    fs::write(&tmp_path, data)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        fs::remove_file(&tmp_path).ok();
        return Err(e.into());
    }
    Ok(())
}
