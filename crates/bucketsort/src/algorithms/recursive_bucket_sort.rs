use log::debug;

use crate::record::MAX_RECORD_WIDTH;
use crate::{Record, SORT_PARAMS, SortContext, SortError};

use super::common;

const RADIX: usize = SORT_PARAMS.radix;

pub fn sort(
    data: &mut [Record],
    digit_position: usize,
    ctx: &mut SortContext,
) -> Result<(), SortError> {
    if digit_position >= MAX_RECORD_WIDTH {
        return Err(SortError::InvalidConfiguration(format!(
            "digit_position must be below {}, got {}",
            MAX_RECORD_WIDTH, digit_position
        )));
    }
    if let Some(width) = batch_width(data)? {
        if digit_position >= width {
            return Err(SortError::InvalidConfiguration(format!(
                "digit_position {} is past the record width {}",
                digit_position, width
            )));
        }
    }

    let SortContext { scratch, work, .. } = ctx;

    // `data` is only written once the whole recursion has succeeded.
    work.clear();
    work.extend_from_slice(data);
    scratch.clear();
    scratch.extend_from_slice(data);

    debug!(
        "recursive bucket sort: {} records from digit {}, cutoff {}",
        data.len(),
        digit_position,
        SORT_PARAMS.recursion_digit_cutoff
    );
    bucket_by_digit(work, scratch, digit_position)?;

    data.copy_from_slice(work);
    Ok(())
}

fn bucket_by_digit(
    data: &mut [Record],
    scratch: &mut [Record],
    position: usize,
) -> Result<(), SortError> {
    debug_assert_eq!(data.len(), scratch.len());

    if data.len() < SORT_PARAMS.recursion_threshold {
        common::insertion_sort(data);
        return Ok(());
    }

    let mut counts = [0usize; RADIX];
    for record in data.iter() {
        counts[digit_at(record, position)?] += 1;
    }

    let mut starts = [0usize; RADIX];
    let mut ends = [0usize; RADIX];
    let mut sum = 0usize;
    for i in 0..RADIX {
        starts[i] = sum;
        sum += counts[i];
        ends[i] = sum;
    }

    let mut next = starts;
    for record in data.iter() {
        let d = digit_at(record, position)?;
        scratch[next[d]] = *record;
        next[d] += 1;
    }
    data.copy_from_slice(scratch);

    // Buckets past the cutoff stay in encounter order.
    if position >= SORT_PARAMS.recursion_digit_cutoff {
        return Ok(());
    }

    for bucket in 0..RADIX {
        let start = starts[bucket];
        let end = ends[bucket];
        if end - start > 1 {
            bucket_by_digit(&mut data[start..end], &mut scratch[start..end], position + 1)?;
        }
    }
    Ok(())
}

/// Width shared by every record, `None` for empty input. Mixed widths would
/// make large groups sort lexicographically and small ones numerically.
fn batch_width(data: &[Record]) -> Result<Option<usize>, SortError> {
    let Some(first) = data.first() else {
        return Ok(None);
    };
    let width = first.width();
    if let Some(other) = data.iter().find(|r| r.width() != width) {
        return Err(SortError::MalformedRecord {
            record: other.to_string(),
            reason: format!("width {} differs from the batch width {}", other.width(), width),
        });
    }
    Ok(Some(width))
}

#[inline]
fn digit_at(record: &Record, position: usize) -> Result<usize, SortError> {
    record
        .digit(position)
        .map(usize::from)
        .ok_or_else(|| SortError::MalformedRecord {
            record: record.to_string(),
            reason: format!("no digit at position {} (width {})", position, record.width()),
        })
}
