pub mod key;
pub mod transform;

pub use self::key::{keyword_to_numeric, normalize, permutations_of, validate, Key};
pub use self::transform::{decode, encode, visualize, MatrixView, FILLER};

use crate::error::CrResult;

/// Normalizes `key` and encodes. Fails fast on a malformed key.
pub fn encrypt(plaintext: &str, key: &str, keep_spaces: bool) -> CrResult<String> {
    let key = normalize(key)?;
    Ok(encode(plaintext, &key, keep_spaces))
}

pub fn decrypt(ciphertext: &str, key: &str) -> CrResult<String> {
    let key = normalize(key)?;
    Ok(decode(ciphertext, &key))
}
