use super::*;

const SYMBOL: &str = "scip-go gomod example v1 `example/pkg`/Run().";

fn occurrence(
    symbol: &str,
    roles: i32,
    range: Vec<i32>,
) -> Occurrence {
    Occurrence {
        symbol: symbol.to_string(),
        symbol_roles: roles,
        range,
        ..Default::default()
    }
}

fn document(occurrences: Vec<Occurrence>) -> Document {
    Document {
        relative_path: "pkg/run.go".to_string(),
        occurrences,
        ..Default::default()
    }
}

#[test]
fn picks_first_definition_occurrence() {
    let definition = SymbolRole::Definition as i32;
    let doc = document(vec![
        occurrence(SYMBOL, 0, vec![9, 4, 7]),
        occurrence("other", definition, vec![1, 0, 3]),
        occurrence(SYMBOL, definition | SymbolRole::Import as i32, vec![3, 5, 8]),
        occurrence(SYMBOL, definition, vec![12, 5, 8]),
    ]);

    let found = find_definition(&doc, SYMBOL).expect("definition");
    assert_eq!(found.range, vec![3, 5, 8]);
}

#[test]
fn reference_only_symbol_has_no_definition() {
    let doc = document(vec![occurrence(SYMBOL, SymbolRole::ReadAccess as i32, vec![2, 0, 3])]);
    assert_eq!(find_definition(&doc, SYMBOL), Err(RangeError::NoDefinition));
}

#[test]
fn four_integer_range_spans_lines() {
    assert_eq!(
        decode_range(&[4, 0, 9, 1]),
        Some(DecodedRange {
            start_line: 4,
            end_line: 9,
        })
    );
}

#[test]
fn three_integer_range_stays_on_start_line() {
    assert_eq!(
        decode_range(&[1, 0, 1]),
        Some(DecodedRange {
            start_line: 1,
            end_line: 1,
        })
    );
}

#[test]
fn short_ranges_have_no_span() {
    assert_eq!(decode_range(&[7, 2]), None);
    assert_eq!(decode_range(&[7]), None);
    assert_eq!(decode_range(&[]), None);
}
