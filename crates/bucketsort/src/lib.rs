mod algorithms;
mod error;
mod generate;
mod record;

pub use algorithms::common::{insertion_sort, insertion_sort_by, is_sorted_non_decreasing};
pub use algorithms::linear_bucket_sort::bucket_key;
pub use error::SortError;
pub use generate::{PHONE_NUMBER_DIGITS, generate_phone_numbers, random_phone_number};
pub use record::{MAX_RECORD_WIDTH, Record, parse_records};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    InsertionSort,
    LinearBucketSort,
    RecursiveBucketSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 3] = [
    SortAlgorithm::InsertionSort,
    SortAlgorithm::LinearBucketSort,
    SortAlgorithm::RecursiveBucketSort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::LinearBucketSort => "linear_bucket_sort",
        SortAlgorithm::RecursiveBucketSort => "recursive_bucket_sort",
    }
}

/// Constants that pin the bucketing behavior.
///
/// `linear_key_offset` and `recursion_digit_cutoff` reproduce two known
/// anomalies: the offset sends a zero-valued record to key -1, and the cutoff
/// leaves the final digit of large groups unsorted. Both are kept as-is
/// pending a product decision; see the boundary tests below.
#[derive(Clone, Copy, Debug)]
pub struct SortParams {
    pub default_num_buckets: usize,
    pub linear_key_offset: i64,
    pub recursion_threshold: usize,
    pub recursion_digit_cutoff: usize,
    pub radix: usize,
}

pub const SORT_PARAMS: SortParams = SortParams {
    default_num_buckets: 10,
    linear_key_offset: 1,
    recursion_threshold: 10,
    recursion_digit_cutoff: 8,
    radix: 10,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SortConfig {
    /// Bucket count for [`SortAlgorithm::LinearBucketSort`].
    pub num_buckets: usize,
    /// First digit examined by [`SortAlgorithm::RecursiveBucketSort`].
    pub digit_position: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            num_buckets: SORT_PARAMS.default_num_buckets,
            digit_position: 0,
        }
    }
}

/// Reusable buffers so repeated sorts do not reallocate.
#[derive(Clone, Debug, Default)]
pub struct SortContext {
    pub scratch: Vec<Record>,
    pub work: Vec<Record>,
    pub keys: Vec<usize>,
    pub var_counts: Vec<usize>,
}

/// Sorts `data` in place. On error `data` is left exactly as it was.
pub fn sort_records(
    algo: SortAlgorithm,
    config: &SortConfig,
    data: &mut [Record],
) -> Result<(), SortError> {
    let mut ctx = SortContext::default();
    sort_records_with_ctx(algo, config, data, &mut ctx)
}

pub fn sort_records_with_ctx(
    algo: SortAlgorithm,
    config: &SortConfig,
    data: &mut [Record],
    ctx: &mut SortContext,
) -> Result<(), SortError> {
    match algo {
        SortAlgorithm::InsertionSort => algorithms::insertion_sort::sort(data, ctx),
        SortAlgorithm::LinearBucketSort => {
            algorithms::linear_bucket_sort::sort(data, config.num_buckets, ctx)
        }
        SortAlgorithm::RecursiveBucketSort => {
            algorithms::recursive_bucket_sort::sort(data, config.digit_position, ctx)
        }
    }
}

/// Fixed-count bucket sort keyed by `value / largest`, each bucket finished
/// with insertion sort.
///
/// Only numeric values are compared, so records of mixed widths come out in
/// numeric order.
pub fn linear_bucket_sort(data: &mut [Record], num_buckets: usize) -> Result<(), SortError> {
    let mut ctx = SortContext::default();
    algorithms::linear_bucket_sort::sort(data, num_buckets, &mut ctx)
}

/// Most-significant-digit-first bucket sort over ten digit buckets, starting
/// at `digit_position`.
///
/// All records must share one width, and `digit_position` must fall inside
/// it; otherwise the sort fails with `MalformedRecord` or
/// `InvalidConfiguration` and `data` is left unchanged.
pub fn recursive_bucket_sort(data: &mut [Record], digit_position: usize) -> Result<(), SortError> {
    let mut ctx = SortContext::default();
    algorithms::recursive_bucket_sort::sort(data, digit_position, &mut ctx)
}
