//! Genomic variant input model
//!
//! Read-only contig and variant types consumed by the notation writer.
//! A variant is built once from upstream data (already trimmed and
//! left-aligned by the caller) and never mutated afterwards.

use crate::error::HgvsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Reference sequence identified by its accession (e.g., "NC_000017.10").
///
/// Uses `Arc<str>` internally for cheap cloning - the accession is shared
/// by every variant built on the contig.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contig {
    accession: Arc<str>,
}

impl Contig {
    /// Create a contig from its accession string.
    ///
    /// The accession becomes the notation prefix, so it must be non-empty.
    pub fn new(accession: impl Into<Arc<str>>) -> Result<Self, HgvsError> {
        let accession = accession.into();
        if accession.is_empty() {
            return Err(HgvsError::EmptyAccession);
        }
        Ok(Self { accession })
    }

    pub fn accession(&self) -> &str {
        &self.accession
    }
}

impl fmt::Display for Contig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.accession)
    }
}

/// Coordinate convention for reading a variant's start position.
///
/// Variants store their coordinates 1-based fully-closed. `LeftOpen` shifts
/// the start one base left (the start bound excludes the first position);
/// the multi-base deletion renderer uses it to anchor the reported span on
/// the deleted bases rather than on the retained prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoordinateSystem {
    /// 1-based, fully closed. The default for all stored coordinates.
    OneBased,
    /// Left-open: the start bound sits one base before the first position.
    LeftOpen,
}

/// Structural type tag of a variant, including mobile-element and tandem
/// subtypes as they appear in structural variant calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariantType {
    /// Single-nucleotide variant.
    Snv,
    /// Multi-nucleotide variant (equal-length replacement).
    Mnv,
    /// Deletion.
    Del,
    /// Mobile-element deletion (e.g. `<DEL:ME:ALU>`).
    DelMe,
    /// Insertion.
    Ins,
    /// Mobile-element insertion (e.g. `<INS:ME:ALU>`).
    InsMe,
    /// Duplication.
    Dup,
    /// Tandem duplication (`<DUP:TANDEM>`).
    DupTandem,
    /// Inversion.
    Inv,
    /// Copy-number variant.
    Cnv,
    /// Breakend.
    Bnd,
}

impl VariantType {
    /// Collapse subtype tags to the coarse structural category.
    pub fn base_type(self) -> BaseType {
        match self {
            VariantType::Snv => BaseType::Snv,
            VariantType::Del | VariantType::DelMe => BaseType::Del,
            VariantType::Ins | VariantType::InsMe => BaseType::Ins,
            VariantType::Dup | VariantType::DupTandem => BaseType::Dup,
            VariantType::Inv => BaseType::Inv,
            VariantType::Mnv | VariantType::Cnv | VariantType::Bnd => BaseType::Other,
        }
    }
}

impl fmt::Display for VariantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            VariantType::Snv => "SNV",
            VariantType::Mnv => "MNV",
            VariantType::Del => "DEL",
            VariantType::DelMe => "DEL:ME",
            VariantType::Ins => "INS",
            VariantType::InsMe => "INS:ME",
            VariantType::Dup => "DUP",
            VariantType::DupTandem => "DUP:TANDEM",
            VariantType::Inv => "INV",
            VariantType::Cnv => "CNV",
            VariantType::Bnd => "BND",
        };
        write!(f, "{}", tag)
    }
}

/// Coarse structural category a [`VariantType`] collapses to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseType {
    Snv,
    Del,
    Dup,
    Ins,
    Inv,
    Other,
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            BaseType::Snv => "SNV",
            BaseType::Del => "DEL",
            BaseType::Dup => "DUP",
            BaseType::Ins => "INS",
            BaseType::Inv => "INV",
            BaseType::Other => "OTHER",
        };
        write!(f, "{}", tag)
    }
}

/// A genomic variant on a contig.
///
/// Coordinates are 1-based fully-closed. Literal variants carry their ref
/// and alt allele sequences; symbolic variants carry coordinates, a type
/// tag, and a change length only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variant {
    contig: Contig,
    start: u64,
    end: u64,
    reference: String,
    alternate: String,
    variant_type: VariantType,
    symbolic: bool,
    change_length: i64,
}

impl Variant {
    /// Create a literal (allele-sequence) variant.
    ///
    /// The end position is derived from the reference allele span and the
    /// change length from the allele length difference. Empty ref or alt
    /// alleles are permitted for pure insertions/deletions, but not both
    /// at once.
    pub fn new(
        contig: Contig,
        start: u64,
        reference: impl Into<String>,
        alternate: impl Into<String>,
        variant_type: VariantType,
    ) -> Result<Self, HgvsError> {
        let reference = reference.into();
        let alternate = alternate.into();
        if start == 0 {
            return Err(HgvsError::ZeroPosition);
        }
        if reference.is_empty() && alternate.is_empty() {
            return Err(HgvsError::MissingAlleles);
        }
        check_allele(&reference)?;
        check_allele(&alternate)?;

        // An empty ref allele alters no reference base; the span collapses
        // to the start position.
        let end = if reference.is_empty() {
            start
        } else {
            start + reference.len() as u64 - 1
        };
        let change_length = alternate.len() as i64 - reference.len() as i64;
        Ok(Self {
            contig,
            start,
            end,
            reference,
            alternate,
            variant_type,
            symbolic: false,
            change_length,
        })
    }

    /// Create a symbolic (breakpoint-only) variant with no allele literals.
    pub fn symbolic(
        contig: Contig,
        start: u64,
        end: u64,
        variant_type: VariantType,
        change_length: i64,
    ) -> Result<Self, HgvsError> {
        if start == 0 {
            return Err(HgvsError::ZeroPosition);
        }
        if end < start {
            return Err(HgvsError::InvalidInterval { start, end });
        }
        Ok(Self {
            contig,
            start,
            end,
            reference: String::new(),
            alternate: String::new(),
            variant_type,
            symbolic: true,
            change_length,
        })
    }

    pub fn contig(&self) -> &Contig {
        &self.contig
    }

    /// Start position, 1-based fully-closed.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Start position under the given coordinate convention.
    pub fn start_with_coordinate_system(&self, system: CoordinateSystem) -> u64 {
        match system {
            CoordinateSystem::OneBased => self.start,
            CoordinateSystem::LeftOpen => self.start - 1,
        }
    }

    /// End position, 1-based fully-closed.
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Reference allele sequence (empty for symbolic variants).
    pub fn ref_allele(&self) -> &str {
        &self.reference
    }

    /// Alternate allele sequence (empty for symbolic variants).
    pub fn alt_allele(&self) -> &str {
        &self.alternate
    }

    pub fn variant_type(&self) -> VariantType {
        self.variant_type
    }

    /// Whether this variant is a breakpoint/structural call with no
    /// literal allele sequences.
    pub fn is_symbolic(&self) -> bool {
        self.symbolic
    }

    /// Signed allele length difference; its absolute value is the number
    /// of bases inserted or deleted.
    pub fn change_length(&self) -> i64 {
        self.change_length
    }
}

fn check_allele(allele: &str) -> Result<(), HgvsError> {
    for c in allele.chars() {
        if !is_iupac_base(c) {
            return Err(HgvsError::InvalidBase {
                base: c,
                allele: allele.to_string(),
            });
        }
    }
    Ok(())
}

/// IUPAC nucleotide codes, including ambiguity codes.
fn is_iupac_base(c: char) -> bool {
    matches!(
        c.to_ascii_uppercase(),
        'A' | 'C' | 'G' | 'T' | 'U' | 'R' | 'Y' | 'S' | 'W' | 'K' | 'M' | 'B' | 'D' | 'H' | 'V'
            | 'N'
    )
}
