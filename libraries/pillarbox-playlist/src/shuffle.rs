//! Cursor-preserving shuffle
//!
//! Fisher-Yates over the playlist items. The position of the current item is
//! followed through every swap so the playlist keeps pointing at the same
//! logical item afterwards.

use rand::Rng;

/// Shuffle `items` in place and return where `cursor` ended up
///
/// Walks `i` from `len - 1` down to `1`, swapping `items[i]` with a uniformly
/// chosen `items[j]`, `j` in `[0, i]`.
pub(crate) fn shuffle_tracking<T, R>(
    items: &mut [T],
    cursor: Option<usize>,
    rng: &mut R,
) -> Option<usize>
where
    R: Rng + ?Sized,
{
    let mut cursor = cursor;

    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);

        cursor = match cursor {
            Some(c) if c == i => Some(j),
            Some(c) if c == j => Some(i),
            other => other,
        };
    }

    cursor
}
