pub(crate) mod common;
pub(crate) mod insertion_sort;
pub(crate) mod linear_bucket_sort;
pub(crate) mod recursive_bucket_sort;
