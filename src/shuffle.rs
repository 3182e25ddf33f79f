use rand::Rng;

/// In-place Fisher–Yates: for `i` from `len - 1` down to 1, swap `i` with a
/// uniform `j` in `0..=i`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    if items.len() < 2 {
        return;
    }
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
