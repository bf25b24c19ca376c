//! Cannabinoid reference table.

use serde::{Deserialize, Serialize};

/// Key into the static cannabinoid table, ordered by boiling point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CannabinoidKind {
    Thca,
    Cbda,
    Cbca,
    Delta9Thc,
    Cbd,
    Delta8Thc,
    Cbn,
    Cbe,
    Benzene,
    Thcv,
    Cbc,
}

/// A cannabinoid, a compound found in cannabis.
#[derive(Debug, PartialEq)]
pub struct Cannabinoid {
    pub short_name: &'static str,
    pub name: &'static str,
    pub effects: &'static [&'static str],
    pub notes: &'static str,
    /// Boiling point in degrees Celsius
    pub boiling_point: u16,
}

impl CannabinoidKind {
    #[allow(dead_code)]
    pub const ALL: [CannabinoidKind; 11] = [
        CannabinoidKind::Thca,
        CannabinoidKind::Cbda,
        CannabinoidKind::Cbca,
        CannabinoidKind::Delta9Thc,
        CannabinoidKind::Cbd,
        CannabinoidKind::Delta8Thc,
        CannabinoidKind::Cbn,
        CannabinoidKind::Cbe,
        CannabinoidKind::Benzene,
        CannabinoidKind::Thcv,
        CannabinoidKind::Cbc,
    ];

    /// Reference data for this cannabinoid.
    pub fn info(self) -> &'static Cannabinoid {
        &CANNABINOIDS[self as usize]
    }
}

static CANNABINOIDS: [Cannabinoid; 11] = [
    Cannabinoid {
        short_name: "THCA",
        name: "Tetrahydrocannabinolic acid",
        effects: &["anti-inflammatory", "anti-epileptic", "anti-proliferic"],
        notes: "Acid Conversion. Requires 30 mins. in the oven",
        boiling_point: 120,
    },
    Cannabinoid {
        short_name: "CBDA",
        name: "Cannabidiolic acid",
        effects: &["anti-inflammatory", "anti-proliferic"],
        notes: "Acid Conversion. Requires 60 mins. in the oven",
        boiling_point: 130,
    },
    Cannabinoid {
        short_name: "CBCA",
        name: "Cannabichromene acid",
        effects: &["anti-bacterial", "anti-fungal"],
        notes: "Acid Conversion. Requires 60 mins. in the oven",
        boiling_point: 140,
    },
    Cannabinoid {
        short_name: "Δ-9-THC",
        name: "Tetrahydrocannabinol",
        effects: &[
            "psychoactive",
            "anti-inflammatory",
            "anti-emetic",
            "appetite stimulant",
            "anti-proliferic",
            "anti-oxidant",
        ],
        notes: "Delta 9 (Δ-9)",
        boiling_point: 157,
    },
    Cannabinoid {
        short_name: "CBD",
        name: "Cannabidiol",
        effects: &["non-psychoactive", "anti-inflammatory", "anti-anxiety"],
        notes: "Excludes Δ-8",
        boiling_point: 165,
    },
    Cannabinoid {
        short_name: "Δ-8-THC",
        name: "Tetrahydrocannabinol",
        effects: &["non-psychoactive", "neuroprotective", "anti-emetic"],
        notes: "Delta 8 (Δ-8)",
        boiling_point: 175,
    },
    Cannabinoid {
        short_name: "CBN",
        name: "Cannabinol",
        effects: &["mildly psychoactive", "anti-spasmodic", "anti-insomnia", "analgesic"],
        notes: "THC degradation",
        boiling_point: 185,
    },
    Cannabinoid {
        short_name: "CBE",
        name: "Cannabielsoin",
        effects: &["sedative", "anti-depressant", "anxiolytic"],
        notes: "CBD degradation",
        boiling_point: 195,
    },
    Cannabinoid {
        short_name: "Benzene",
        name: "Benzene",
        effects: &["toxic", "carcinogenic"],
        notes: "Avoid harmful toxic vapours",
        boiling_point: 205,
    },
    Cannabinoid {
        short_name: "THCV",
        name: "Tetrahydrocannabivarin",
        effects: &[
            "psychoactive",
            "euphoriant",
            "anti-thc",
            "analgesic",
            "anti-diabetic",
            "anorectic",
            "bone stimulant",
        ],
        notes: "Blocks THC",
        boiling_point: 220,
    },
    Cannabinoid {
        short_name: "CBC",
        name: "Cannabichromene",
        effects: &[
            "non-psychoactive",
            "anti-proliferative",
            "anti-bacterial",
            "bone stimulant",
            "anti-inflammatory",
            "analgesic",
        ],
        notes: "Includes THCV",
        boiling_point: 220,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_kind() {
        assert_eq!(CannabinoidKind::Thca.info().short_name, "THCA");
        assert_eq!(CannabinoidKind::Cbd.info().name, "Cannabidiol");
        assert_eq!(CannabinoidKind::Cbc.info().notes, "Includes THCV");
    }

    #[test]
    fn test_boiling_points_ascend() {
        let points: Vec<u16> = CannabinoidKind::ALL
            .iter()
            .map(|kind| kind.info().boiling_point)
            .collect();
        assert!(points.windows(2).all(|w| w[0] <= w[1]));
    }
}
