use rand::Rng;

use crate::Record;

pub const PHONE_NUMBER_DIGITS: usize = 10;

/// Ten independent uniform digits; leading zeros are kept.
pub fn random_phone_number<R: Rng + ?Sized>(rng: &mut R) -> Record {
    let mut value = 0u64;
    for _ in 0..PHONE_NUMBER_DIGITS {
        value = value * 10 + rng.random_range(0..=9u64);
    }
    Record::from_parts_unchecked(value, PHONE_NUMBER_DIGITS)
}

pub fn generate_phone_numbers<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Record> {
    (0..count).map(|_| random_phone_number(rng)).collect()
}
