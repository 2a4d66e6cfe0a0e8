use super::normalizer::normalize;
use std::collections::HashMap;
use std::sync::OnceLock;

static MAKE_ALIASES: OnceLock<HashMap<String, &'static str>> = OnceLock::new();

/// Returns the curated spelling for an informal make, if one is known.
/// The input must already be normalized.
pub fn canonical_make(normalized_make: &str) -> Option<&'static str> {
    alias_map().get(normalized_make).copied()
}

fn alias_map() -> &'static HashMap<String, &'static str> {
    MAKE_ALIASES.get_or_init(|| {
        // Informal spellings observed in registry feeds mapped to the
        // spellings the reference datasets use.
        const INFORMAL_TO_CANONICAL: &[(&str, &str)] = &[
            ("Mercedes", "MERCEDES BENZ"),
            ("Merc", "MERCEDES BENZ"),
            ("VW", "VOLKSWAGEN"),
            ("Volkswagon", "VOLKSWAGEN"),
            ("Landrover", "LAND ROVER"),
            ("Range Rover", "LAND ROVER"),
            ("Alfa", "ALFA ROMEO"),
            ("Aston", "ASTON MARTIN"),
            ("Rolls", "ROLLS ROYCE"),
            ("Rolls-Royce", "ROLLS ROYCE"),
            ("Chevy", "CHEVROLET"),
            ("Beemer", "BMW"),
        ];

        let mut map = HashMap::with_capacity(INFORMAL_TO_CANONICAL.len());
        for (informal, canonical) in INFORMAL_TO_CANONICAL {
            map.insert(normalize(informal), *canonical);
        }
        map
    })
}
