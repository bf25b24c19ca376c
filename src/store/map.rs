//! Name-keyed strain collection shared by both store variants.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::errors::AppError;
use crate::models::Strain;

/// Strains keyed by product name. Serializes as a plain name → strain mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub(super) struct StrainMap(BTreeMap<String, Strain>);

impl StrainMap {
    /// Build from loaded records, keyed by their own names.
    pub(super) fn from_strains(strains: impl IntoIterator<Item = Strain>) -> Self {
        Self(
            strains
                .into_iter()
                .map(|strain| (strain.name.clone(), strain))
                .collect(),
        )
    }

    /// Insert a strain whose name is not taken yet.
    pub(super) fn insert(&mut self, strain: Strain) -> Result<(), AppError> {
        if self.0.contains_key(&strain.name) {
            tracing::warn!("Refusing to add existing strain {:?}", strain.name);
            return Err(AppError::AlreadyExists(strain.name));
        }
        self.0.insert(strain.name.clone(), strain);
        Ok(())
    }

    pub(super) fn all(&self) -> Vec<Strain> {
        tracing::debug!("get_strains -> {} strains", self.0.len());
        self.0.values().cloned().collect()
    }

    pub(super) fn find(&self, name: &str) -> Result<Strain, AppError> {
        self.0.get(name).cloned().ok_or_else(|| {
            tracing::debug!("Strain {:?} does not exist", name);
            AppError::NotFound(name.to_string())
        })
    }

    pub(super) fn len(&self) -> usize {
        self.0.len()
    }
}
