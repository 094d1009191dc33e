use chrono::Utc;
use rand::Rng;

pub const ORGANIZATION_PREFIX: &str = "org";
pub const PROJECT_PREFIX: &str = "proj";
pub const ACTIVITY_PREFIX: &str = "act";

const SUFFIX_LEN: usize = 9;
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// `<prefix>_<unix millis>_<9 base36 chars>`. Unique in practice, not
/// guaranteed.
pub fn generate_id(prefix: &str) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect();
    format!("{}_{}_{}", prefix, Utc::now().timestamp_millis(), suffix)
}
