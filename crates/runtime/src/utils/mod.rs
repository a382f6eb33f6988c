mod hash;

pub use hash::{fingerprint_hex, short_fingerprint};
