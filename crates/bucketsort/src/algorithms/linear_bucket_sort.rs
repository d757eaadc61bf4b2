use log::debug;

use crate::{Record, SORT_PARAMS, SortContext, SortError};

use super::common;

pub fn sort(
    data: &mut [Record],
    num_buckets: usize,
    ctx: &mut SortContext,
) -> Result<(), SortError> {
    if num_buckets == 0 {
        return Err(SortError::InvalidConfiguration("num_buckets must be positive".to_string()));
    }

    let len = data.len();
    let Some(largest) = common::max_value(data) else {
        return Ok(());
    };
    if largest == 0 {
        return Err(SortError::Arithmetic(format!(
            "division by zero: all {} records have value 0",
            len
        )));
    }

    let SortContext {
        scratch,
        keys,
        var_counts,
        ..
    } = ctx;

    // Every key is checked before any record moves, so a failure leaves
    // `data` untouched.
    keys.clear();
    for &record in data.iter() {
        keys.push(bucket_key(record, largest, num_buckets)?);
    }

    common::scatter_by_key(data, keys, num_buckets, var_counts, scratch);
    let starts = &var_counts[..num_buckets];

    let mut occupied = 0usize;
    for i in 0..num_buckets {
        let range = common::bucket_range(starts, i, len);
        if !range.is_empty() {
            occupied += 1;
        }
        common::insertion_sort(&mut scratch[range]);
    }
    debug!(
        "linear bucket sort: {} records, largest={}, {}/{} buckets occupied",
        len, largest, occupied, num_buckets
    );

    data.copy_from_slice(&scratch[..len]);
    Ok(())
}

/// `trunc(value / largest * num_buckets - offset)`.
///
/// With the offset of 1 a zero-valued record maps to -1, and every value in
/// the lowest `1/num_buckets` of the range shares bucket 0.
#[inline]
pub fn bucket_key(record: Record, largest: u64, num_buckets: usize) -> Result<usize, SortError> {
    let scaled = record.value() as f64 / largest as f64 * num_buckets as f64;
    let key = (scaled - SORT_PARAMS.linear_key_offset as f64).trunc() as i64;
    if key < 0 || key as u64 >= num_buckets as u64 {
        return Err(SortError::KeyOutOfRange {
            record,
            key,
            num_buckets,
        });
    }
    Ok(key as usize)
}
