// core/src/registry/naming.rs
use crate::program::Role;

/// Derive the user-facing command name for a registered symbol.
///
/// Strips the trailing role suffix when present, then splits the remaining
/// CamelCase identifier into words and joins them lowercased with `-`:
/// `("SetParameterClient", Role::Client)` becomes `"set-parameter"`.
pub fn derive_name(symbol: &str, role: Role) -> String {
    let stem = symbol.strip_suffix(role.suffix()).unwrap_or(symbol);
    wordify(stem).join("-")
}

/// Split a CamelCase identifier into lowercased words.
///
/// A word boundary sits before an upper-case letter that follows a lower-case
/// letter or digit, and before the last letter of an acronym run
/// (`"HTTPServer"` -> `["http", "server"]`). Digits stick to the word they
/// follow.
fn wordify(identifier: &str) -> Vec<String> {
    let chars: Vec<char> = identifier.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && !current.is_empty() {
            let after_word = chars[i - 1].is_lowercase() || chars[i - 1].is_ascii_digit();
            let ends_acronym =
                chars[i - 1].is_uppercase() && chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if after_word || ends_acronym {
                words.push(std::mem::take(&mut current).to_lowercase());
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}
