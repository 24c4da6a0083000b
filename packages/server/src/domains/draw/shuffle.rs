use rand::Rng;

/// Fisher–Yates shuffle into a new vector; `items` is left untouched.
///
/// Walks from the last index down to 1, swapping each slot with a uniformly
/// chosen index in `0..=i`. All randomness comes from `rng`, so a seeded
/// generator reproduces the same permutation.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}
