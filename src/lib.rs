//! hgvs-genomic: HGVS genomic (g.) notation writer
//!
//! Converts a genomic variant into its canonical HGVS genomic notation
//! string. A variant may structurally fit more than one HGVS category;
//! classification applies the nomenclature's fixed precedence (deletion >
//! inversion > duplication > insertion), then a category-specific renderer
//! produces the string.
//!
//! # Example
//!
//! ```
//! use hgvs_genomic::{to_hgvs_genomic, Contig, Variant, VariantType};
//!
//! let contig = Contig::new("NC_000017.10")?;
//! let variant = Variant::new(contig, 45221273, "A", "C", VariantType::Snv)?;
//! assert_eq!(to_hgvs_genomic(&variant), "NC_000017.10:g.45221273A>C");
//! # Ok::<(), hgvs_genomic::HgvsError>(())
//! ```
//!
//! The writer is pure and stateless: it never mutates its input, holds no
//! state between calls, and is safe to invoke concurrently.

pub mod classify;
pub mod error;
pub mod format;
pub mod variant;

pub use classify::{classify, MutationCategory};
pub use error::HgvsError;
pub use format::to_hgvs_genomic;
pub use variant::{BaseType, Contig, CoordinateSystem, Variant, VariantType};
