//! Parsing of user-typed values.

use log::debug;

use crate::error::InputError;

/// Parses a comma separated list of integers such as `8,3,5,1,9`. Whitespace around every token
/// is ignored, tokens that are not integers are dropped. An input without any integer yields an
/// empty vector; it is up to the caller to ask again.
pub fn parse_integer_list(text: &str) -> Vec<i32> {
    text.split(',')
        .map(str::trim)
        .filter_map(|token| match token.parse::<i32>() {
            Ok(value) => Some(value),
            Err(_) => {
                if !token.is_empty() {
                    debug!("dropping token '{}' from list input", token);
                }
                None
            }
        })
        .collect()
}

/// Parses a single non-negative integer. No upper bound is applied, see [`bounded`].
pub fn parse_non_negative_int(text: &str) -> Result<u32, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }

    let value: i64 = text
        .parse()
        .map_err(|_| InputError::NotAnInteger(text.to_string()))?;

    if value < 0 {
        return Err(InputError::Negative(value));
    }
    u32::try_from(value).map_err(|_| InputError::NotAnInteger(text.to_string()))
}

/// Rejects values above `max`.
pub fn bounded(value: u32, max: u32) -> Result<u32, InputError> {
    if value > max {
        Err(InputError::TooLarge { value, max })
    } else {
        Ok(value)
    }
}
