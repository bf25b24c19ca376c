//! Terpene reference table.

use serde::{Deserialize, Serialize};

/// Key into the static terpene table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TerpeneKind {
    BetaCaryophyllene,
    BetaSitosterol,
    AlphaPinene,
    BetaMyrcene,
    Delta3Carene,
    Eucalyptol,
    Limonene,
    PCymene,
    Apigenin,
    CannaflavinA,
    Linalool,
    Terpinen4Ol,
    Borneol,
    AlphaTerpineol,
    Pulegone,
    Quercetin,
}

/// A terpene, an aromatic compound found in cannabis.
#[derive(Debug, PartialEq)]
pub struct Terpene {
    pub name: &'static str,
    pub effects: &'static [&'static str],
    pub flavors: &'static [&'static str],
    /// Boiling point in degrees Celsius
    pub boiling_point: u16,
}

impl TerpeneKind {
    /// All terpenes in table order.
    pub const ALL: [TerpeneKind; 16] = [
        TerpeneKind::BetaCaryophyllene,
        TerpeneKind::BetaSitosterol,
        TerpeneKind::AlphaPinene,
        TerpeneKind::BetaMyrcene,
        TerpeneKind::Delta3Carene,
        TerpeneKind::Eucalyptol,
        TerpeneKind::Limonene,
        TerpeneKind::PCymene,
        TerpeneKind::Apigenin,
        TerpeneKind::CannaflavinA,
        TerpeneKind::Linalool,
        TerpeneKind::Terpinen4Ol,
        TerpeneKind::Borneol,
        TerpeneKind::AlphaTerpineol,
        TerpeneKind::Pulegone,
        TerpeneKind::Quercetin,
    ];

    /// Reference data for this terpene.
    pub fn info(self) -> &'static Terpene {
        &TERPENES[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// All terpenes ordered by display name, as offered by the strain form.
    pub fn sorted_by_name() -> Vec<TerpeneKind> {
        let mut kinds = Self::ALL.to_vec();
        kinds.sort_by_key(|kind| kind.name());
        kinds
    }
}

static TERPENES: [Terpene; 16] = [
    Terpene {
        name: "β-Caryophyllene",
        effects: &["anti-malarial", "cytoprotective", "anti-inflammatory"],
        flavors: &["pepper", "spicy", "wood"],
        boiling_point: 130,
    },
    Terpene {
        name: "β-Sitosterol",
        effects: &["anti-inflammatory", "5-α-reductase inhibitor"],
        flavors: &["herbal", "earthy"],
        boiling_point: 140,
    },
    Terpene {
        name: "α-Pinene",
        effects: &[
            "anti-inflammatory",
            "bone stimulant",
            "anti-biotic",
            "bronchodilator",
            "anti-neoplastic",
        ],
        flavors: &["pine", "rosemary", "sage"],
        boiling_point: 157,
    },
    Terpene {
        name: "β-Myrcene",
        effects: &["analgesic", "anti-biotic", "anti-mutagenic", "anti-inflammatory"],
        flavors: &["musk", "earth", "herbal"],
        boiling_point: 165,
    },
    Terpene {
        name: "Δ-3-Carene",
        effects: &["anti-inflammatory"],
        flavors: &["sweet", "pine", "cedar"],
        boiling_point: 165,
    },
    Terpene {
        name: "Eucalyptol",
        effects: &["blood flow stimulant"],
        flavors: &["mint", "spicy", "cool"],
        boiling_point: 175,
    },
    Terpene {
        name: "Limonene",
        effects: &["anti-depressant", "agonist"],
        flavors: &["citrus", "lemon", "orange"],
        boiling_point: 175,
    },
    Terpene {
        name: "P-Cymene",
        effects: &["anti-biotic", "anti-candidal"],
        flavors: &["citrus", "herbal", "spicy"],
        boiling_point: 175,
    },
    Terpene {
        name: "Apigenin",
        effects: &["estrogenic", "anxiolytic"],
        flavors: &["herbal", "spicy", "sweet"],
        boiling_point: 175,
    },
    Terpene {
        name: "Cannaflavin A",
        effects: &["COX inhibitor", "LO inhibitor"],
        flavors: &["herbal", "spicy", "sweet"],
        boiling_point: 185,
    },
    Terpene {
        name: "Linalool",
        effects: &["sedative", "anti-depressant", "anxiolytic", "immune potentiator"],
        flavors: &["floral", "lavender", "citrus"],
        boiling_point: 195,
    },
    Terpene {
        name: "Terpinen-4-ol",
        effects: &["anti-biotic", "AChE inhibitor"],
        flavors: &["herbal", "spicy", "sweet"],
        boiling_point: 205,
    },
    Terpene {
        name: "Borneol",
        effects: &["anti-biotic"],
        flavors: &["mint", "camphor", "spicy"],
        boiling_point: 205,
    },
    Terpene {
        name: "α-Terpineol",
        effects: &["sedative", "anti-biotic", "anti-oxidant", "anti-malarial"],
        flavors: &["floral", "citrus", "apple"],
        boiling_point: 220,
    },
    Terpene {
        name: "Pulegone",
        effects: &["sedative", "anti-pyretic"],
        flavors: &["mint", "camphor", "spicy"],
        boiling_point: 220,
    },
    Terpene {
        name: "Quercetin",
        effects: &["anti-mutagenic", "anti-viral", "anti-oxidant", "anti-neoplastic"],
        flavors: &["herbal", "spicy", "sweet"],
        boiling_point: 220,
    },
];
