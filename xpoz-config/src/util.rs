use std::str::FromStr;

use crate::loader::error::ConfigLoadError;

/// Treat unset, empty and whitespace-only values alike.
pub fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Parse a numeric setting, naming the offending key on failure.
pub fn parse_number<T: FromStr>(key: &str, raw: Option<String>) -> Result<Option<T>, ConfigLoadError> {
    non_empty(raw)
        .map(|value| {
            value.parse().map_err(|_| ConfigLoadError::InvalidNumber {
                key: key.to_string(),
                value,
            })
        })
        .transpose()
}
