//! Channel name handling.
//!
//! Channel names are separator-delimited segments (`user.created`). A
//! registration ending in the wildcard marker (`user.*`) is stored under its
//! prefix with the separator kept (`user.`), which is exactly the string
//! [`wildcard_prefix`] derives from a dispatched name one level deeper.

use crate::error::{DispatchError, Result};

/// Key a registration is stored under: the name minus one trailing wildcard.
///
/// Purely syntactic; `"user.cre*"` becomes `"user.cre"`.
pub fn registration_key(name: &str, wildcard: char) -> &str {
    name.strip_suffix(wildcard).unwrap_or(name)
}

/// Dispatched name with one trailing separator removed.
pub fn normalize(name: &str, separator: char) -> &str {
    name.strip_suffix(separator).unwrap_or(name)
}

/// Wildcard registration key that matches a normalized dispatch name.
///
/// Everything up to and including the last separator, provided that
/// separator is not the first character.
pub fn wildcard_prefix(name: &str, separator: char) -> Option<&str> {
    name.rfind(separator)
        .filter(|&pos| pos > 0)
        .map(|pos| &name[..pos + separator.len_utf8()])
}

/// Check that a name is a well-formed exact or wildcard channel.
///
/// Accepts `user.created` and `user.*`. Rejects empty names, names ending in
/// a bare separator, and any wildcard marker that is not the whole final
/// segment after a non-empty prefix.
pub fn validate_pattern(name: &str, separator: char, wildcard: char) -> Result<()> {
    if name.is_empty() {
        return Err(DispatchError::EmptyName);
    }

    let key = registration_key(name, wildcard);
    let misplaced = || DispatchError::MisplacedWildcard {
        name: name.to_string(),
    };

    if key.contains(wildcard) {
        return Err(misplaced());
    }

    if key.len() == name.len() {
        // exact registration
        if name.ends_with(separator) {
            return Err(DispatchError::TrailingSeparator {
                name: name.to_string(),
            });
        }
        return Ok(());
    }

    match normalize(key, separator) {
        prefix if prefix.len() == key.len() || prefix.is_empty() => Err(misplaced()),
        _ => Ok(()),
    }
}
