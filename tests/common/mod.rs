use sigcookie::{KeyRing, SignedCookies, SignedPair};

pub const CURRENT_KEY: &str = "current-signing-key";
pub const PREVIOUS_KEY: &str = "previous-signing-key";

pub fn codec(keys: &[&str]) -> SignedCookies {
    SignedCookies::new(KeyRing::new(keys).unwrap())
}

/// The `Cookie` request header a browser would send back for `pair`.
pub fn cookie_header(pair: &SignedPair) -> String {
    format!(
        "{}; {}",
        pair.value.to_name_value(),
        pair.signature.to_name_value()
    )
}

/// Flips one ASCII character in place, keeping the header well formed.
pub fn flip_char(s: &str, at: usize) -> String {
    s.char_indices()
        .map(|(i, c)| {
            if i != at {
                c
            } else if c == 'A' {
                'B'
            } else {
                'A'
            }
        })
        .collect()
}
