use rand::seq::SliceRandom;

/// Returns the elements of `input` in uniformly random order. The input
/// slice is left untouched; the permutation is drawn fresh on every call.
pub fn shuffled<T: Clone>(input: &[T]) -> Vec<T> {
    let mut output = input.to_vec();
    output.shuffle(&mut rand::rng());
    output
}
