//! Strain model, the record this catalogue tracks.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TerpeneKind;

/// Phenotype classification of a strain.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Genetic {
    /// Tall and thin with narrow leaves
    #[default]
    Sativa,
    /// Short and bushy with wide leaves
    Indica,
    /// A mix of both phenotypes
    Hybrid,
}

impl Genetic {
    pub const ALL: [Genetic; 3] = [Genetic::Sativa, Genetic::Indica, Genetic::Hybrid];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genetic::Sativa => "Sativa",
            Genetic::Indica => "Indica",
            Genetic::Hybrid => "Hybrid",
        }
    }
}

/// A cannabis strain record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Strain {
    pub id: Uuid,
    /// Product name, unique within a store
    pub name: String,
    /// The breed
    pub cultivar: String,
    /// The producer or importer
    pub manufacturer: String,
    /// Country of origin
    pub country: String,
    pub genetic: Genetic,
    /// Whether the flowers were radiation treated
    pub radiated: bool,
    /// THC content in %
    pub thc: f64,
    /// CBD content in %
    pub cbd: f64,
    #[serde(default)]
    pub terpenes: BTreeSet<TerpeneKind>,
    /// Amount in grams
    pub amount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Strain {
    /// One-line summary used by list rows.
    pub fn list_description(&self) -> String {
        format!(
            "Amount: {:.1} g, THC/CBD: {:.1}% / {:.1}%, Genetic: {}",
            self.amount,
            self.thc,
            self.cbd,
            self.genetic.as_str()
        )
    }

    /// Terpene display names in set order.
    pub fn terpene_names(&self) -> Vec<&'static str> {
        self.terpenes.iter().map(|t| t.name()).collect()
    }
}

impl fmt::Display for Strain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Strain: {} ({})", self.name, self.cultivar)?;
        writeln!(f, "Manufacturer: {} ({})", self.manufacturer, self.country)?;
        writeln!(
            f,
            "Genetic: {} | Radiated: {}",
            self.genetic.as_str(),
            self.radiated
        )?;
        writeln!(f, "THC: {:.2}% | CBD: {:.2}%", self.thc, self.cbd)?;
        writeln!(f, "Terpenes: {}", self.terpene_names().join(", "))?;
        writeln!(f, "Amount: {:.2}g", self.amount)?;
        writeln!(
            f,
            "CreatedAt: {} | UpdatedAt: {}",
            self.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.updated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }
}
