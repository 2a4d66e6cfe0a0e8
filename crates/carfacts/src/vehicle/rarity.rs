use crate::datasets::{self, RarityRecord};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RarityBand {
    VeryRare,
    Rare,
    Uncommon,
    Common,
    VeryCommon,
}

impl RarityBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryRare => "Very Rare",
            Self::Rare => "Rare",
            Self::Uncommon => "Uncommon",
            Self::Common => "Common",
            Self::VeryCommon => "Very Common",
        }
    }

    fn from_total(total: u32) -> Self {
        match total {
            0..=999 => Self::VeryRare,
            1_000..=4_999 => Self::Rare,
            5_000..=24_999 => Self::Uncommon,
            25_000..=99_999 => Self::Common,
            _ => Self::VeryCommon,
        }
    }
}

/// How many of this model remain on UK roads, licensed or declared SORN.
#[derive(Debug, Clone, Serialize)]
pub struct Rarity {
    pub licensed: u32,
    pub sorn: u32,
    pub total: u32,
    pub band: RarityBand,
}

pub fn lookup(make: &str, model: &str) -> Option<Rarity> {
    datasets::shared().rarity.resolve(make, model).map(assess)
}

fn assess(record: &RarityRecord) -> Rarity {
    let total = record.licensed + record.sorn;
    Rarity {
        licensed: record.licensed,
        sorn: record.sorn,
        total,
        band: RarityBand::from_total(total),
    }
}
