use rstest::rstest;
use volcfg::{Document, NodeRef, Value};

fn assert_same_nodes<'a>(
    left: impl ExactSizeIterator<Item = NodeRef<'a>>,
    right: impl ExactSizeIterator<Item = NodeRef<'a>>,
) {
    assert_eq!(left.len(), right.len());
    for (left, right) in left.zip(right) {
        assert_eq!(left.key(), right.key());
        assert_eq!(left.kind(), right.kind());
        let left_values: Vec<Value<'_>> = left.values().collect();
        let right_values: Vec<Value<'_>> = right.values().collect();
        assert_eq!(left_values.len(), right_values.len());
        for (l, r) in left_values.iter().zip(&right_values) {
            match (l, r) {
                (Value::Float(l), Value::Float(r)) => assert!((l - r).abs() < 1e-6),
                _ => assert_eq!(l, r),
            }
        }
        assert_same_nodes(left.children(), right.children());
    }
}

fn round_trip(input: &str) -> (Document, Document, String) {
    let first = volcfg::from_str(input).expect("parse input");
    let text = volcfg::to_string(&first).expect("serialize");
    let second = volcfg::from_str(&text).expect("reparse output");
    (first, second, text)
}

#[rstest]
#[case("")]
#[case("a = 1")]
#[case("a { b { c = 1 } }")]
#[case("empty { }")]
#[case("list = [1, 2.5, \"x\"]")]
#[case("quote = \"she said \\\"no\\\"\"")]
#[case("path = \"C:\\\\dir\\\\\" tab = \"a\\tb\"")]
#[case("ratio = 0.1234567")]
#[case("big = 9223372036854775807")]
#[case(include_str!("data/lvm.conf"))]
fn serialize_then_parse_preserves_tree(#[case] input: &str) {
    let (first, second, text) = round_trip(input);
    assert_same_nodes(first.roots(), second.roots());
    let again = volcfg::to_string(&second).expect("serialize again");
    assert_eq!(text, again);
}

#[rstest]
fn largest_floats_survive_round_trip() {
    let input = format!("big = {:.1}\nhuge = 1{}.5", f64::MAX, "0".repeat(300));
    let (first, second, _) = round_trip(&input);
    assert_same_nodes(first.roots(), second.roots());
    assert_eq!(second.find_float("big", '/', 0.0), f64::MAX);
    assert_eq!(second.find_float("huge", '/', 0.0), 1e300);
}

#[rstest]
fn overflowing_float_is_not_loaded() {
    let input = format!("big = {}.0", "9".repeat(400));
    let err = volcfg::from_str(&input).unwrap_err();
    assert!(err.is_parse());
    assert_eq!(err.message, "float out of range");
}

#[rstest]
fn canonical_text_for_sample() {
    let (_, _, text) = round_trip("global {\n units = \"h\"\n  thin { level = 2 }\n}\nlist=[1,2]");
    assert_eq!(
        text,
        "global {\n  units=\"h\"\n  thin {\n    level=2\n  }\n}\nlist=[1, 2]\n"
    );
}

#[rstest]
fn floats_are_written_with_six_decimals() {
    let (_, second, text) = round_trip("ratio = 0.1234567");
    assert_eq!(text, "ratio=0.123457\n");
    assert_eq!(second.find_float("ratio", '/', 0.0), 0.123457);
}

#[rstest]
fn to_writer_matches_to_string() {
    let document = volcfg::from_str("a { b = [1, 2] }").unwrap();
    let mut out = Vec::new();
    volcfg::to_writer(&mut out, &document).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), volcfg::to_string(&document).unwrap());
    assert_eq!(volcfg::to_vec(&document).unwrap(), volcfg::to_string(&document).unwrap().into_bytes());
}
