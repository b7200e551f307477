use rand::Rng;
use rand::seq::SliceRandom;

/// Uniformly random permutation of the catalog, in place.
///
/// Fisher-Yates over the supplied source: every permutation is reachable
/// and the element multiset is untouched. Sequential placement is the
/// absence of this call; the expander's enumeration order stands.
pub fn shuffle<T>(catalog: &mut [T], rng: &mut impl Rng) {
    catalog.shuffle(rng);
}
