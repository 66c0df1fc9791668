//! Height-string normalization.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HeightError {
    #[error("negative height: {0:?}")]
    Negative(String),
    #[error("unrecognized height format: {0:?}")]
    UnrecognizedFormat(String),
}

/// Parses a formatted height string into whole centimeters.
///
/// Accepts `"<int> cm"` and `"<float> meters"` only; meters are
/// multiplied by 100 and truncated. Rejects anything with a leading
/// `-` before looking at the suffix. This is a strict string parser,
/// not a unit converter: `"0 cm"` is valid, `"5 feet"` is not.
pub fn height_to_cm(height: &str) -> Result<u32, HeightError> {
    if height.starts_with('-') {
        return Err(HeightError::Negative(height.to_string()));
    }

    if let Some(prefix) = height.strip_suffix(" cm") {
        prefix
            .trim()
            .parse::<u32>()
            .map_err(|_| HeightError::UnrecognizedFormat(height.to_string()))
    } else if let Some(prefix) = height.strip_suffix(" meters") {
        let meters: f64 = prefix
            .trim()
            .parse()
            .map_err(|_| HeightError::UnrecognizedFormat(height.to_string()))?;
        Ok((meters * 100.0) as u32)
    } else {
        Err(HeightError::UnrecognizedFormat(height.to_string()))
    }
}
