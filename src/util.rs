use crate::constants::directive::SRC_SUFFIX;
use std::borrow::Cow;

/// Lower-cases a directive name, returning the input untouched when it has
/// no uppercase characters.
#[doc(hidden)]
pub fn normalize_lower(value: &str) -> String {
    if !value.chars().any(char::is_uppercase) {
        return value.to_owned();
    }
    value.chars().flat_map(char::to_lowercase).collect()
}

/// Maps a stored directive name to the token written into the header.
///
/// Hyphenated names (`report-uri`, `frame-ancestors`, ...) are emitted as-is,
/// bare names receive the `-src` suffix.
#[doc(hidden)]
pub fn directive_token(name: &str) -> Cow<'_, str> {
    if name.contains('-') {
        Cow::Borrowed(name)
    } else {
        let mut token = String::with_capacity(name.len() + SRC_SUFFIX.len());
        token.push_str(name);
        token.push_str(SRC_SUFFIX);
        Cow::Owned(token)
    }
}

pub(crate) fn trimmed_values<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values
        .into_iter()
        .filter_map(|value| {
            let value = value.into();
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else if trimmed.len() == value.len() {
                Some(value)
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
