//! File-name classification into archive partitions
//!
//! Incoming files follow a `YYYYMMDDhhmmss`-style naming convention; only the
//! first six characters are consumed, as year and month. No numeric or range
//! validation is performed beyond the length check — a name like `zzzz99.txt`
//! classifies to partition `zzzz/99`. That permissiveness is deliberate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Destination partition derived from a file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    /// Four-character year component.
    pub year: String,
    /// Two-character month component.
    pub month: String,
}

impl Partition {
    /// Relative directory for this partition, `year/month`.
    pub fn relative_dir(&self) -> PathBuf {
        PathBuf::from(&self.year).join(&self.month)
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.year, self.month)
    }
}

/// Why a file name could not be classified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("file name too short to extract date")]
    TooShort,
    #[error("file name does not split cleanly at the year/month boundary")]
    SplitBoundary,
}

/// Derive the archive partition from a bare file name.
///
/// Total over arbitrary input: any string, including empty and non-ASCII,
/// yields either a [`Partition`] or a [`ClassifyError`] without panicking.
/// A multi-byte character straddling either split point is reported as
/// [`ClassifyError::SplitBoundary`] rather than sliced.
pub fn classify(file_name: &str) -> Result<Partition, ClassifyError> {
    if file_name.len() < 6 {
        return Err(ClassifyError::TooShort);
    }

    match (file_name.get(0..4), file_name.get(4..6)) {
        (Some(year), Some(month)) => Ok(Partition {
            year: year.to_owned(),
            month: month.to_owned(),
        }),
        _ => Err(ClassifyError::SplitBoundary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamped_name_yields_year_and_month() {
        let partition = classify("20240210211522.png").unwrap();
        assert_eq!(partition.year, "2024");
        assert_eq!(partition.month, "02");
        assert_eq!(partition.relative_dir(), PathBuf::from("2024/02"));
    }

    #[test]
    fn five_character_name_is_too_short() {
        assert_eq!(classify("a.png"), Err(ClassifyError::TooShort));
    }

    #[test]
    fn six_character_name_with_extension_still_splits() {
        // "ab.png" is six bytes, so the length gate admits it and the
        // split is applied verbatim, extension and all.
        let partition = classify("ab.png").unwrap();
        assert_eq!(partition.year, "ab.p");
        assert_eq!(partition.month, "ng");
    }

    #[test]
    fn empty_name_is_too_short() {
        assert_eq!(classify(""), Err(ClassifyError::TooShort));
    }

    #[test]
    fn six_characters_is_exactly_enough() {
        let partition = classify("202401").unwrap();
        assert_eq!(partition.year, "2024");
        assert_eq!(partition.month, "01");
    }

    #[test]
    fn no_validation_beyond_length() {
        // No numeric or range checks; any six leading characters split.
        let partition = classify("zzzz99.txt").unwrap();
        assert_eq!(partition.year, "zzzz");
        assert_eq!(partition.month, "99");
    }

    #[test]
    fn multibyte_prefix_does_not_panic() {
        // 'é' is two bytes; byte index 4 lands inside the second 'é'.
        assert_eq!(classify("aéé.png"), Err(ClassifyError::SplitBoundary));
    }

    #[test]
    fn display_reads_as_year_slash_month() {
        let partition = classify("20240210211522.png").unwrap();
        assert_eq!(partition.to_string(), "2024/02");
    }
}
