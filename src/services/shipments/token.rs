//! Pre-clear token generation

use rand::Rng;

/// Prefix shared by every pre-clear token
pub const TOKEN_PREFIX: &str = "UPS-PCT-";

const TOKEN_SUFFIX_LEN: usize = 8;
const TOKEN_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a token such as `UPS-PCT-7K2Q9XMA`
pub fn generate_token() -> String {
    generate_token_with(&mut rand::thread_rng())
}

/// Generate a token from the given random source
pub fn generate_token_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suffix: String = (0..TOKEN_SUFFIX_LEN)
        .map(|_| TOKEN_CHARSET[rng.gen_range(0..TOKEN_CHARSET.len())] as char)
        .collect();
    format!("{}{}", TOKEN_PREFIX, suffix)
}

/// Whether `token` has the pre-clear token shape
pub fn is_valid_token(token: &str) -> bool {
    token.strip_prefix(TOKEN_PREFIX).is_some_and(|suffix| {
        suffix.len() == TOKEN_SUFFIX_LEN
            && suffix
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    })
}
