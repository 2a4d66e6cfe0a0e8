use crate::datasets::{self, ColourRecord};
use serde::Serialize;

/// The model's most popular colour and where that colour sits in the
/// national colour chart.
#[derive(Debug, Clone, Serialize)]
pub struct ColourPopularity {
    pub colour: String,
    pub rank: u8,
    pub top_five: bool,
}

pub fn lookup(make: &str, model: &str) -> Option<ColourPopularity> {
    datasets::shared()
        .colour_popularity
        .resolve(make, model)
        .map(assess)
}

fn assess(record: &ColourRecord) -> ColourPopularity {
    ColourPopularity {
        colour: record.colour.clone(),
        rank: record.rank,
        top_five: record.rank <= 5,
    }
}
