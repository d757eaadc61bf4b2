use std::ops::Range;

use crate::Record;

/// Stable in-place insertion sort by `Ord`.
#[inline]
pub fn insertion_sort<T: Ord>(data: &mut [T]) {
    insertion_sort_by(data, |a, b| a < b);
}

/// Stable in-place insertion sort. `is_less(a, b)` must be a strict weak
/// order; equal elements never pass each other.
pub fn insertion_sort_by<T, F>(data: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    if len < 2 {
        return;
    }

    for i in 1..len {
        let mut j = i;
        while j > 0 && is_less(&data[j], &data[j - 1]) {
            data.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[inline]
pub fn is_sorted_non_decreasing<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

#[inline]
pub fn max_value(data: &[Record]) -> Option<u64> {
    data.iter().map(Record::value).max()
}

/// Stable counting scatter of `src` into `dst` by precomputed bucket keys.
///
/// On return `counts[..bucket_count]` holds the start offset of each bucket
/// in `dst`.
pub fn scatter_by_key(
    src: &[Record],
    keys: &[usize],
    bucket_count: usize,
    counts: &mut Vec<usize>,
    dst: &mut Vec<Record>,
) {
    debug_assert_eq!(src.len(), keys.len());

    if counts.len() < bucket_count * 2 {
        counts.resize(bucket_count * 2, 0);
    }
    dst.clear();
    dst.extend_from_slice(src);

    let (starts, heads) = counts[..(bucket_count * 2)].split_at_mut(bucket_count);
    starts.fill(0);
    heads.fill(0);

    for &key in keys {
        starts[key] += 1;
    }

    let mut prefix = 0usize;
    for i in 0..bucket_count {
        let c = starts[i];
        starts[i] = prefix;
        heads[i] = prefix;
        prefix += c;
    }

    for (&record, &key) in src.iter().zip(keys) {
        dst[heads[key]] = record;
        heads[key] += 1;
    }
}

/// Index range of bucket `i` given the bucket start offsets.
#[inline]
pub fn bucket_range(starts: &[usize], i: usize, len: usize) -> Range<usize> {
    let end = if i + 1 < starts.len() {
        starts[i + 1]
    } else {
        len
    };
    starts[i]..end
}
