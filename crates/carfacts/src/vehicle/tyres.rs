use crate::datasets::{self, TyreSizeRecord};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TyreSizes {
    pub front: String,
    pub rear: String,
}

pub fn lookup(make: &str, model: &str) -> Option<TyreSizes> {
    datasets::shared()
        .tyre_sizes
        .resolve(make, model)
        .map(|record: &TyreSizeRecord| TyreSizes {
            front: record.front.clone(),
            rear: record.rear.clone(),
        })
}
