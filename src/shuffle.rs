use rand::Rng;

/// Fisher–Yates shuffle in place.
///
/// Walks from the back, swapping each slot with a uniformly chosen slot at or
/// before it, so a slice of length `n` takes `n - 1` exchange steps and every
/// ordering is equally likely.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for current in (1..items.len()).rev() {
        let target = rng.random_range(0..=current);
        items.swap(current, target);
    }
}
