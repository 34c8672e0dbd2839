//! Rendering of classified variants as HGVS genomic notation
//!
//! Each category has its own renderer; all share the `<accession>:g.`
//! prefix. The renderers never fail for a variant that satisfied the
//! corresponding predicate: every substring operation relies on a prefix
//! relationship the predicate already established.

use crate::classify::{classify, MutationCategory};
use crate::variant::{CoordinateSystem, Variant};
use tracing::trace;

/// Render a variant as its canonical HGVS genomic (g.) string.
///
/// Pure and stateless; safe to call concurrently over independent
/// variants.
pub fn to_hgvs_genomic(variant: &Variant) -> String {
    let category = classify(variant);
    trace!(%category, accession = variant.contig().accession(), "selected mutation category");
    match category {
        MutationCategory::Deletion => deletion(variant),
        MutationCategory::Inversion => inversion(variant),
        MutationCategory::Duplication => duplication(variant),
        MutationCategory::Insertion => insertion(variant),
        MutationCategory::Substitution => substitution(variant),
        MutationCategory::DelIns => delins(variant),
    }
}

fn prefix(variant: &Variant) -> String {
    format!("{}:g.", variant.contig().accession())
}

/// `g.<pos><ref>><alt>`. Also renders the fallback for equal-length
/// replacements that matched no other category, using the raw alleles.
fn substitution(variant: &Variant) -> String {
    format!(
        "{}{}{}>{}",
        prefix(variant),
        variant.start(),
        variant.ref_allele(),
        variant.alt_allele()
    )
}

fn deletion(variant: &Variant) -> String {
    if variant.is_symbolic() {
        return format!("{}{}_{}del", prefix(variant), variant.start(), variant.end());
    }
    // The retained prefix of ref has length alt.len(); the remainder is
    // the deleted sequence.
    let deleted = &variant.ref_allele()[variant.alt_allele().len()..];
    let length = variant.change_length().unsigned_abs();
    if length == 1 {
        // Shift from the anchor base to the first actually-deleted base.
        return format!("{}{}del{}", prefix(variant), variant.start() + 1, deleted);
    }
    // Re-anchor via the left-open start so the span covers exactly the
    // deleted bases, not the retained prefix. The span is computed signed:
    // a zero-change variant (ref == alt under a DEL tag) still renders a
    // degenerate span instead of underflowing.
    let start =
        variant.start_with_coordinate_system(CoordinateSystem::LeftOpen) as i64 + length as i64;
    let end = start + length as i64 - 1;
    format!("{}{}_{}del{}", prefix(variant), start, end, deleted)
}

fn duplication(variant: &Variant) -> String {
    if variant.is_symbolic() {
        return format!("{}{}_{}dup", prefix(variant), variant.start(), variant.end());
    }
    let inserted = &variant.alt_allele()[variant.ref_allele().len()..];
    let length = variant.change_length().unsigned_abs();
    if length == 1 {
        return format!("{}{}dup{}", prefix(variant), variant.start(), inserted);
    }
    let end = variant.start() + length - 1;
    format!("{}{}_{}dup{}", prefix(variant), variant.start(), end, inserted)
}

fn insertion(variant: &Variant) -> String {
    if variant.is_symbolic() {
        return format!("{}{}_{}ins", prefix(variant), variant.start(), variant.end());
    }
    // Insertions sit between two flanking positions; no reference base is
    // altered.
    let inserted = &variant.alt_allele()[variant.ref_allele().len()..];
    format!(
        "{}{}_{}ins{}",
        prefix(variant),
        variant.start(),
        variant.start() + 1,
        inserted
    )
}

fn inversion(variant: &Variant) -> String {
    format!("{}{}_{}inv", prefix(variant), variant.start(), variant.end())
}

fn delins(variant: &Variant) -> String {
    let length = variant.change_length().unsigned_abs();
    if length == 1 {
        return format!(
            "{}{}delins{}",
            prefix(variant),
            variant.start(),
            variant.alt_allele()
        );
    }
    let end = variant.start() + length;
    format!(
        "{}{}_{}delins{}",
        prefix(variant),
        variant.start(),
        end,
        variant.alt_allele()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::{Contig, VariantType};

    fn contig(accession: &str) -> Contig {
        Contig::new(accession).unwrap()
    }

    fn literal(start: u64, reference: &str, alternate: &str, vt: VariantType) -> Variant {
        Variant::new(contig("NC_000001.11"), start, reference, alternate, vt).unwrap()
    }

    #[test]
    fn test_substitution() {
        let v = Variant::new(contig("NC_000017.10"), 45221273, "A", "C", VariantType::Snv)
            .unwrap();
        assert_eq!(to_hgvs_genomic(&v), "NC_000017.10:g.45221273A>C");
    }

    #[test]
    fn test_single_base_deletion() {
        // anchor C at 100, T at 101 deleted
        let v = literal(100, "CT", "C", VariantType::Del);
        assert_eq!(to_hgvs_genomic(&v), "NC_000001.11:g.101delT");
    }

    #[test]
    fn test_multi_base_deletion_reports_deleted_span() {
        // anchor C at 100; TG at 101-102 deleted
        let v = literal(100, "CTG", "C", VariantType::Del);
        assert_eq!(to_hgvs_genomic(&v), "NC_000001.11:g.101_102delTG");
    }

    #[test]
    fn test_symbolic_deletion() {
        let v = Variant::symbolic(contig("NC_000001.11"), 1000, 5000, VariantType::Del, -4001)
            .unwrap();
        assert_eq!(to_hgvs_genomic(&v), "NC_000001.11:g.1000_5000del");
    }

    #[test]
    fn test_single_base_duplication() {
        let v = literal(100, "A", "AA", VariantType::Ins);
        assert_eq!(to_hgvs_genomic(&v), "NC_000001.11:g.100dupA");
    }

    #[test]
    fn test_homopolymer_run_duplication() {
        let v = literal(100, "A", "AAA", VariantType::Ins);
        assert_eq!(to_hgvs_genomic(&v), "NC_000001.11:g.100_101dupAA");
    }

    #[test]
    fn test_symbolic_duplication() {
        let v = Variant::symbolic(contig("NC_000001.11"), 100, 200, VariantType::Dup, 101)
            .unwrap();
        assert_eq!(to_hgvs_genomic(&v), "NC_000001.11:g.100_200dup");
    }

    #[test]
    fn test_literal_insertion() {
        let v = literal(100, "C", "CAA", VariantType::Ins);
        assert_eq!(to_hgvs_genomic(&v), "NC_000001.11:g.100_101insAA");
    }

    #[test]
    fn test_symbolic_insertion() {
        let v = Variant::symbolic(contig("NC_000001.11"), 100, 101, VariantType::InsMe, 300)
            .unwrap();
        assert_eq!(to_hgvs_genomic(&v), "NC_000001.11:g.100_101ins");
    }

    #[test]
    fn test_inversion() {
        let v = Variant::symbolic(
            contig("NC_000003.11"),
            38626065,
            38626082,
            VariantType::Inv,
            0,
        )
        .unwrap();
        assert_eq!(to_hgvs_genomic(&v), "NC_000003.11:g.38626065_38626082inv");
    }

    #[test]
    fn test_delins_length_one() {
        let v = literal(100, "AG", "T", VariantType::Del);
        assert_eq!(to_hgvs_genomic(&v), "NC_000001.11:g.100delinsT");
    }

    #[test]
    fn test_delins_multi_base() {
        let v = literal(100, "A", "TGC", VariantType::Ins);
        assert_eq!(to_hgvs_genomic(&v), "NC_000001.11:g.100_102delinsTGC");
    }

    #[test]
    fn test_fallback_substitution_uses_raw_alleles() {
        let v = literal(100, "AT", "GC", VariantType::Mnv);
        assert_eq!(to_hgvs_genomic(&v), "NC_000001.11:g.100AT>GC");
    }

    #[test]
    fn test_zero_change_deletion_renders_degenerate_span() {
        // ref == alt under a DEL tag passes the deletion predicate with a
        // change length of zero; the renderer must still return a string,
        // mirroring the original's signed span arithmetic
        let v = literal(1, "A", "A", VariantType::Del);
        assert_eq!(to_hgvs_genomic(&v), "NC_000001.11:g.0_-1del");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let v = literal(100, "CTG", "C", VariantType::Del);
        assert_eq!(to_hgvs_genomic(&v), to_hgvs_genomic(&v));
    }
}
