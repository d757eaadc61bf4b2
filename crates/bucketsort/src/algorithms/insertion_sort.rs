use crate::{Record, SortContext, SortError};

use super::common;

pub fn sort(data: &mut [Record], _ctx: &mut SortContext) -> Result<(), SortError> {
    common::insertion_sort(data);
    Ok(())
}
