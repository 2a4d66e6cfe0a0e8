use super::aliases::canonical_make;
use super::normalizer::{composite_key, normalize};
use std::collections::{HashMap, HashSet};

/// Composite keys for which a lookup must refuse to answer even when the
/// table holds an entry. Used by domains where a fuzzy or exact hit would
/// be a guess (a model spanning several body styles, for instance).
pub type SuppressedKeys = HashSet<String>;

struct Entry<V> {
    make: String,
    model: String,
    key: String,
    value: V,
}

/// An insertion-ordered table keyed by `"MAKE|MODEL"`.
///
/// Registry feeds rarely spell a make/model pair exactly the way the
/// curated datasets do, so resolution falls through three tiers: an exact
/// key hit, an exact hit after rewriting the make through the alias
/// table, and finally an ordered scan matching by model substring
/// containment in either direction. The scan honors insertion order and
/// the first satisfying entry wins, which keeps fuzzy resolution
/// deterministic; dataset ordering is therefore part of the data.
pub struct LookupTable<V> {
    entries: Vec<Entry<V>>,
    index: HashMap<String, usize>,
}

impl<V> LookupTable<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Adds an entry, normalizing both key components. When two rows
    /// normalize to the same key the first one keeps the exact-match
    /// slot; both stay visible to the ordered scan.
    pub fn insert(&mut self, make: &str, model: &str, value: V) {
        let make = normalize(make);
        let model = normalize(model);
        let key = composite_key(&make, &model);
        let position = self.entries.len();
        self.index.entry(key.clone()).or_insert(position);
        self.entries.push(Entry {
            make,
            model,
            key,
            value,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn resolve(&self, make: &str, model: &str) -> Option<&V> {
        self.resolve_excluding(make, model, None)
    }

    /// Three-tier resolution with an optional veto set. A vetoed key is
    /// excluded at every tier, exact match included. Empty or absent
    /// components resolve to nothing rather than erroring.
    pub fn resolve_excluding(
        &self,
        make: &str,
        model: &str,
        suppressed: Option<&SuppressedKeys>,
    ) -> Option<&V> {
        let make = normalize(make);
        let model = normalize(model);
        if make.is_empty() || model.is_empty() {
            return None;
        }

        if let Some(value) = self.exact(&make, &model, suppressed) {
            return Some(value);
        }

        let alias = canonical_make(&make);
        if let Some(alias) = alias {
            if let Some(value) = self.exact(alias, &model, suppressed) {
                return Some(value);
            }
        }

        for candidate in std::iter::once(make.as_str()).chain(alias) {
            for entry in &self.entries {
                if entry.make != candidate || is_vetoed(suppressed, &entry.key) {
                    continue;
                }
                if entry.model.contains(&model) || model.contains(entry.model.as_str()) {
                    return Some(&entry.value);
                }
            }
        }

        None
    }

    fn exact(&self, make: &str, model: &str, suppressed: Option<&SuppressedKeys>) -> Option<&V> {
        let key = composite_key(make, model);
        if is_vetoed(suppressed, &key) {
            return None;
        }
        self.index.get(&key).map(|&position| &self.entries[position].value)
    }
}

impl<V> Default for LookupTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

fn is_vetoed(suppressed: Option<&SuppressedKeys>, key: &str) -> bool {
    suppressed.is_some_and(|keys| keys.contains(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> LookupTable<u32> {
        let mut table = LookupTable::new();
        table.insert("Ford", "Fiesta", 1);
        table.insert("Volkswagen", "Golf", 2);
        table.insert("Mercedes-Benz", "C Class", 3);
        table.insert("BMW", "3 Series", 4);
        table.insert("Audi", "A3", 5);
        table
    }

    #[test]
    fn exact_match_ignores_case_and_separators() {
        let table = sample_table();
        assert_eq!(table.resolve("ford", "FIESTA"), Some(&1));
        assert_eq!(table.resolve("Mercedes Benz", "C-Class"), Some(&3));
    }

    #[test]
    fn alias_tier_rewrites_the_make() {
        let table = sample_table();
        assert_eq!(table.resolve("VW", "Golf"), Some(&2));
        assert_eq!(table.resolve("Merc", "C Class"), Some(&3));
    }

    #[test]
    fn fuzzy_tier_matches_model_containment_in_either_direction() {
        let table = sample_table();
        // Input model contains the entry's model.
        assert_eq!(table.resolve("Volkswagen", "Golf GTI"), Some(&2));
        // Entry's model contains the input model.
        assert_eq!(table.resolve("BMW", "Series"), Some(&4));
    }

    #[test]
    fn fuzzy_tier_respects_insertion_order() {
        let mut table = LookupTable::new();
        table.insert("Ford", "Fiesta", 1);
        table.insert("Ford", "Fiesta Van", 2);
        assert_eq!(table.resolve("Ford", "Fiesta Van ST"), Some(&1));
    }

    #[test]
    fn trim_level_outside_containment_does_not_match() {
        // "320D" neither contains nor is contained by "3 SERIES".
        let table = sample_table();
        assert_eq!(table.resolve("BMW", "320D"), None);
    }

    #[test]
    fn empty_components_resolve_to_nothing() {
        let table = sample_table();
        assert_eq!(table.resolve("", "Fiesta"), None);
        assert_eq!(table.resolve("Ford", "   "), None);
    }

    #[test]
    fn vetoed_key_is_excluded_at_every_tier() {
        let table = sample_table();
        let suppressed: SuppressedKeys = ["AUDI|A3".to_string()].into_iter().collect();

        // Exact tier.
        assert_eq!(table.resolve_excluding("Audi", "A3", Some(&suppressed)), None);
        // Fuzzy tier: "A3 Sportback" would otherwise land on AUDI|A3.
        assert_eq!(
            table.resolve_excluding("Audi", "A3 Sportback", Some(&suppressed)),
            None
        );
        // Unrelated keys are unaffected.
        assert_eq!(
            table.resolve_excluding("Ford", "Fiesta", Some(&suppressed)),
            Some(&1)
        );
    }

    #[test]
    fn repeated_calls_return_identical_results() {
        let table = sample_table();
        let first = table.resolve("VW", "Golf GTI").copied();
        for _ in 0..10 {
            assert_eq!(table.resolve("VW", "Golf GTI").copied(), first);
        }
    }
}
