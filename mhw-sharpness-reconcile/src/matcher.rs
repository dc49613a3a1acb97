//! Similarity scoring between weapons from different sources.
//!
//! The score is a plain count of agreeing identity fields. Names are never
//! compared (the sources publish in different languages) and neither is
//! list position.

use mhw_sharpness_core::{SpecialIdentity, Weapon};

/// Count the identity fields on which `a` and `b` agree.
///
/// * one point per slot position with the same rank
/// * one point when both have the same number of elements, plus one per
///   agreeing type, hidden flag and value among paired elements
/// * one point each for category, attack, affinity, defense and elderseal
/// * one point per agreeing category-specific field
///
/// The score is symmetric and `score(a, b) <= score(a, a)` for any `b`.
pub fn score(a: &Weapon, b: &Weapon) -> u32 {
    let slots = a
        .slots()
        .ranks()
        .iter()
        .zip(b.slots().ranks())
        .filter(|(x, y)| x == y)
        .count() as u32;

    let element_count = u32::from(a.elements().len() == b.elements().len());
    let elements: u32 = a
        .elements()
        .iter()
        .zip(b.elements())
        .map(|(x, y)| {
            u32::from(x.element_type == y.element_type)
                + u32::from(x.hidden == y.hidden)
                + u32::from(x.value == y.value)
        })
        .sum();

    let fields = [
        a.category() == b.category(),
        a.attack() == b.attack(),
        a.affinity() == b.affinity(),
        a.defense() == b.defense(),
        a.elderseal() == b.elderseal(),
    ]
    .into_iter()
    .filter(|&same| same)
    .count() as u32;

    slots
        + element_count
        + elements
        + fields
        + special_score(a.special().identity(), b.special().identity())
}

fn special_score(a: SpecialIdentity, b: SpecialIdentity) -> u32 {
    use SpecialIdentity as S;

    match (a, b) {
        (S::ChargeBlade(x), S::ChargeBlade(y)) => u32::from(x == y),
        (S::SwitchAxe(x, v), S::SwitchAxe(y, w)) => u32::from(x == y) + u32::from(v == w),
        (S::Gunlance(x, v), S::Gunlance(y, w)) => u32::from(x == y) + u32::from(v == w),
        (S::InsectGlaive(x), S::InsectGlaive(y)) => u32::from(x == y),
        _ => 0,
    }
}

/// The best score `weapon` can reach: its score against itself.
pub fn max_score(weapon: &Weapon) -> u32 {
    score(weapon, weapon)
}

/// Every candidate that reaches the highest score against `weapon`, in
/// candidate order. Empty only when there are no candidates.
pub fn best_matches<'a>(weapon: &Weapon, candidates: &'a [Weapon]) -> Vec<&'a Weapon> {
    best_match_indices(weapon, candidates)
        .into_iter()
        .map(|i| &candidates[i])
        .collect()
}

/// Positions in `candidates` of the best matches for `weapon`.
pub fn best_match_indices(weapon: &Weapon, candidates: &[Weapon]) -> Vec<usize> {
    let scores: Vec<u32> = candidates.iter().map(|c| score(weapon, c)).collect();
    let Some(&best) = scores.iter().max() else {
        return Vec::new();
    };
    scores
        .iter()
        .enumerate()
        .filter(|&(_, &s)| s == best)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
#[path = "tests/matcher_tests.rs"]
mod tests;
