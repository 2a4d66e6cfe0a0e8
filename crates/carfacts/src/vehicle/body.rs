use crate::datasets;

/// Body style for the make/model pair, unless the pair is on the
/// ambiguous list. Models sold in several body styles are deliberately
/// unanswered: the suppression set vetoes them at every matcher tier, so
/// a curated entry for the common variant never leaks out as a guess.
pub fn lookup(make: &str, model: &str) -> Option<String> {
    let datasets = datasets::shared();
    datasets
        .body_types
        .resolve_excluding(make, model, Some(&datasets.ambiguous_bodies))
        .map(|record| record.body_type.clone())
}
