use quickcheck_macros::quickcheck;

use super::arbitrary::ArbitraryDocument;
use crate::parse;

/// Serializing a parsed tree and re-parsing it must reproduce the tree.
#[quickcheck]
fn roundtrip_via_display(doc: ArbitraryDocument) -> bool {
    let text = doc.0.to_string();
    parse(&text) == Ok(doc.0)
}

#[quickcheck]
fn whitespace_padding_never_changes_the_result(doc: ArbitraryDocument) -> bool {
    let text = doc.0.to_string();
    let padded = format!("  \n{text}\t ");
    parse(&padded) == Ok(doc.0)
}

#[quickcheck]
fn double_roundtrip_is_stable(doc: ArbitraryDocument) -> bool {
    let Ok(first) = parse(&doc.0.to_string()) else {
        return false;
    };
    parse(&first.to_string()) == Ok(first)
}
