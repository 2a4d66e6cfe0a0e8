use crate::datasets::{self, DimensionsRecord};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Dimensions {
    pub length_mm: u32,
    pub width_mm: u32,
    pub height_mm: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot_litres: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kerb_weight_kg: Option<u32>,
}

pub fn lookup(make: &str, model: &str) -> Option<Dimensions> {
    datasets::shared()
        .dimensions
        .resolve(make, model)
        .map(|record: &DimensionsRecord| Dimensions {
            length_mm: record.length_mm,
            width_mm: record.width_mm,
            height_mm: record.height_mm,
            boot_litres: record.boot_litres,
            kerb_weight_kg: record.kerb_weight_kg,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_resolves_against_the_embedded_dataset() {
        let fiesta = lookup("Ford", "Fiesta").expect("fiesta in dataset");
        assert_eq!(fiesta.length_mm, 4040);
        assert_eq!(fiesta.boot_litres, Some(292));
    }

    #[test]
    fn alias_makes_resolve_through_the_shared_matcher() {
        let evoque = lookup("Landrover", "Range Rover Evoque").expect("evoque in dataset");
        assert_eq!(evoque.height_mm, 1649);
    }
}
