//! Mutation category selection
//!
//! A variant can structurally satisfy more than one HGVS category; the
//! nomenclature fixes the precedence when that happens: deletion >
//! inversion > duplication > conversion > insertion. Conversions are not
//! representable in this model, so the slot is skipped. Substitution and
//! deletion-insertion never overlap the structural categories and are
//! tested last.

use crate::variant::{BaseType, Variant, VariantType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The single HGVS category selected for a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MutationCategory {
    Deletion,
    Inversion,
    Duplication,
    Insertion,
    Substitution,
    DelIns,
}

impl fmt::Display for MutationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MutationCategory::Deletion => "deletion",
            MutationCategory::Inversion => "inversion",
            MutationCategory::Duplication => "duplication",
            MutationCategory::Insertion => "insertion",
            MutationCategory::Substitution => "substitution",
            MutationCategory::DelIns => "delins",
        };
        write!(f, "{}", name)
    }
}

/// Select exactly one mutation category for a variant.
///
/// The predicate order is mandated by the HGVS precedence rule; earlier
/// categories win on ambiguity. Equal-length non-SNV replacements that
/// match no predicate fall back to substitution and are rendered from the
/// raw ref/alt pair.
pub fn classify(variant: &Variant) -> MutationCategory {
    if is_deletion(variant) {
        return MutationCategory::Deletion;
    }
    if is_inversion(variant) {
        return MutationCategory::Inversion;
    }
    if is_duplication(variant) {
        return MutationCategory::Duplication;
    }
    if is_insertion(variant) {
        return MutationCategory::Insertion;
    }
    if is_substitution(variant) {
        return MutationCategory::Substitution;
    }
    if is_delins(variant) {
        return MutationCategory::DelIns;
    }
    MutationCategory::Substitution
}

/// One or more reference bases are absent from the alt allele. A literal
/// deletion must retain the alt allele as a prefix of the reference,
/// otherwise something was inserted as well.
fn is_deletion(variant: &Variant) -> bool {
    variant.variant_type().base_type() == BaseType::Del
        && (variant.is_symbolic() || variant.ref_allele().starts_with(variant.alt_allele()))
}

/// Inversions are always symbolic/structural in this model; the type tag
/// alone decides.
fn is_inversion(variant: &Variant) -> bool {
    variant.variant_type().base_type() == BaseType::Inv
}

/// A copy of one or more bases inserted directly 3' of the original copy.
///
/// From literal alleles only the homopolymer-run case is detectable: a
/// single-base reference whose alt consists entirely of that base.
/// Multi-base tandem duplications expressed as literals classify as
/// insertions or delins instead; that boundary is deliberate.
fn is_duplication(variant: &Variant) -> bool {
    if variant.variant_type().base_type() == BaseType::Dup && variant.is_symbolic() {
        return true;
    }
    !variant.is_symbolic() && alt_is_run_of_ref(variant.ref_allele(), variant.alt_allele())
}

fn alt_is_run_of_ref(reference: &str, alternate: &str) -> bool {
    if reference.len() != 1 || alternate.is_empty() {
        return false;
    }
    let base = reference.as_bytes()[0];
    alternate.bytes().all(|b| b == base)
}

/// One or more bases inserted with no reference base altered. A literal
/// insertion must retain the full reference as a prefix of the alt allele.
fn is_insertion(variant: &Variant) -> bool {
    variant.variant_type().base_type() == BaseType::Ins
        && (variant.is_symbolic() || variant.alt_allele().starts_with(variant.ref_allele()))
}

fn is_substitution(variant: &Variant) -> bool {
    variant.variant_type() == VariantType::Snv
}

/// Catch-all: unequal-length replacement that shares no prefix with the
/// reference and fits none of the simpler categories.
fn is_delins(variant: &Variant) -> bool {
    variant.variant_type() != VariantType::Snv
        && variant.ref_allele().len() != variant.alt_allele().len()
        && !variant.alt_allele().starts_with(variant.ref_allele())
}
