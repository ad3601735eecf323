use chrono::NaiveDate;
use rand::{distributions::Alphanumeric, Rng};

pub const REFERENCE_PREFIX: &str = "GRP";
const SUFFIX_LEN: usize = 6;

/// `GRP-YYYYMMDD-XXXXXX`. Uniqueness is only probabilistic; nothing checks for collisions.
pub fn generate_reference(date: NaiveDate) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_uppercase())
        .collect();

    format!("{}-{}-{}", REFERENCE_PREFIX, date.format("%Y%m%d"), suffix)
}
