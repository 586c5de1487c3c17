use rand::{Rng, distr::Alphanumeric};

const SUFFIX_LEN: usize = 10;

/// Opaque entity identifier: the entity prefix plus a random alphanumeric
/// suffix, e.g. `comment-h2Fk91LmQx`.
pub fn generate(prefix: &str) -> String {
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(SUFFIX_LEN)
        .map(char::from)
        .collect();

    format!("{prefix}-{suffix}")
}
