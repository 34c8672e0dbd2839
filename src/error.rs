//! Error types for hgvs-genomic
//!
//! Errors are only produced while constructing the input model; formatting
//! itself is total over validly constructed variants.

use thiserror::Error;

/// Errors raised when building a [`crate::Contig`] or [`crate::Variant`]
/// from upstream data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HgvsError {
    /// The contig accession was empty. The accession becomes the notation
    /// prefix, so an empty one would yield an unusable HGVS string.
    #[error("contig accession must not be empty")]
    EmptyAccession,

    /// A non-symbolic variant was given empty ref and alt alleles.
    #[error("non-symbolic variant must carry a ref or alt allele")]
    MissingAlleles,

    /// An allele contained a character outside the IUPAC nucleotide codes.
    #[error("invalid base {base:?} in allele {allele:?}")]
    InvalidBase { base: char, allele: String },

    /// Positions are 1-based; zero is not a valid coordinate.
    #[error("position must be 1-based, got 0")]
    ZeroPosition,

    /// The end coordinate preceded the start coordinate.
    #[error("invalid interval: end {end} precedes start {start}")]
    InvalidInterval { start: u64, end: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HgvsError::InvalidInterval { start: 100, end: 50 };
        assert_eq!(err.to_string(), "invalid interval: end 50 precedes start 100");
    }

    #[test]
    fn test_invalid_base_display() {
        let err = HgvsError::InvalidBase {
            base: 'Q',
            allele: "AQG".to_string(),
        };
        assert_eq!(err.to_string(), "invalid base 'Q' in allele \"AQG\"");
    }
}
