//! Short website identifiers.
//!
//! An identifier is the first two bytes of the MD5 digest of the name's UTF-8
//! bytes, rendered as four lowercase hex characters. With 65536 possible
//! values, distinct names can share an identifier; it is a fingerprint, not a key.

use md5::{Digest, Md5};

/// Number of digest bytes kept in an identifier.
pub const ID_BYTES: usize = 2;

/// Derive the identifier for `name`. The caller is responsible for trimming.
pub fn website_id(name: &str) -> String {
    let digest = Md5::digest(name.as_bytes());
    hex::encode(&digest[..ID_BYTES])
}
