//! Parsing user-supplied arrays.

use crate::error::SortvizError;

/// Parse a list of unsigned magnitudes separated by commas and/or
/// whitespace, e.g. `"5, 3 1,4"`.
///
/// # Errors
///
/// Returns [`SortvizError::InvalidValue`] for the first element that is not
/// a non-negative integer fitting in `u32`. Nothing is returned on error,
/// so callers never see a partially parsed array.
pub fn parse_values(input: &str) -> Result<Vec<u32>, SortvizError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<u32>().map_err(|_| SortvizError::InvalidValue {
                position,
                token: token.to_owned(),
            })
        })
        .collect()
}
