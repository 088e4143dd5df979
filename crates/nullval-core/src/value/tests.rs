use crate::value::{Value, ValueKind};

// ---- helpers -----------------------------------------------------------

fn v_txt(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn decode(json: &str) -> Value {
    serde_json::from_str(json).expect("test json should decode")
}

fn encode(value: &Value) -> String {
    serde_json::to_string(value).expect("test value should encode")
}

// ---- display -----------------------------------------------------------

#[test]
fn display_scalars() {
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Int(-12).to_string(), "-12");
    assert_eq!(Value::Uint(u64::MAX).to_string(), "18446744073709551615");
    assert_eq!(Value::Float64(2.0).to_string(), "2");
    assert_eq!(Value::Float64(0.1).to_string(), "0.1");
    assert_eq!(v_txt("plain text").to_string(), "plain text");
    assert_eq!(Value::Blob(vec![0; 4]).to_string(), "[blob (4 bytes)]");
}

#[test]
fn display_containers() {
    let list = Value::List(vec![Value::Int(1), v_txt("a"), Value::List(vec![])]);
    assert_eq!(list.to_string(), "[1, a, []]");

    let map = Value::Map(vec![("k".to_string(), Value::Bool(false))]);
    assert_eq!(map.to_string(), "{k: false}");
}

// ---- json --------------------------------------------------------------

#[test]
fn decode_picks_narrowest_integer() {
    assert_eq!(decode("5"), Value::Int(5));
    assert_eq!(decode("-5"), Value::Int(-5));
    assert_eq!(decode("18446744073709551615"), Value::Uint(u64::MAX));
    assert_eq!(decode("1.5"), Value::Float64(1.5));
    assert_eq!(decode("2.0"), Value::Float64(2.0));
}

#[test]
fn decode_containers_keep_order() {
    let value = decode(r#"{"b":1,"a":[null,"x"]}"#);

    assert_eq!(
        value,
        Value::Map(vec![
            ("b".to_string(), Value::Int(1)),
            ("a".to_string(), Value::List(vec![Value::Null, v_txt("x")])),
        ])
    );
}

#[test]
fn encode_is_untagged() {
    let value = Value::List(vec![
        Value::Null,
        Value::Bool(true),
        Value::Int(-1),
        Value::Float64(0.5),
        v_txt("s"),
    ]);

    assert_eq!(encode(&value), r#"[null,true,-1,0.5,"s"]"#);
}

#[test]
fn blob_encodes_as_base64() {
    assert_eq!(encode(&Value::Blob(b"hello".to_vec())), r#""aGVsbG8=""#);
}

// ---- conversions -------------------------------------------------------

#[test]
fn from_primitives() {
    assert_eq!(Value::from(7u8), Value::Int(7));
    assert_eq!(Value::from(7usize), Value::Int(7));
    assert_eq!(Value::from(u64::MAX), Value::Uint(u64::MAX));
    assert_eq!(Value::from(-7i32), Value::Int(-7));
    assert_eq!(Value::from(1.5f32), Value::Float64(1.5));
    assert_eq!(Value::from("t"), v_txt("t"));
    assert_eq!(Value::from(&b"ab"[..]), Value::Blob(vec![b'a', b'b']));
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some("x")), v_txt("x"));
    assert_eq!(Value::from(()), Value::Null);
}

#[test]
fn kinds() {
    assert_eq!(Value::Null.kind(), ValueKind::Null);
    assert_eq!(Value::from_list([1, 2]).kind(), ValueKind::List);
    assert_eq!(ValueKind::Float64.to_string(), "float64");
    assert!(Value::default().is_null());
}

#[test]
fn unsigned_input_matches_decoded_form() {
    for n in [0u64, 1, i64::MAX as u64] {
        assert_eq!(Value::from(n), decode(&n.to_string()));
    }

    let big = (i64::MAX as u64) + 1;
    assert_eq!(Value::from(big), decode(&big.to_string()));
    assert_eq!(Value::from(big), Value::Uint(big));
}

#[test]
fn into_canonical_rewrites_nested_uints() {
    let value = Value::Map(vec![(
        "k".to_string(),
        Value::List(vec![Value::Uint(3), Value::Uint(u64::MAX)]),
    )]);

    assert_eq!(
        value.into_canonical(),
        Value::Map(vec![(
            "k".to_string(),
            Value::List(vec![Value::Int(3), Value::Uint(u64::MAX)]),
        )])
    );
}

#[test]
fn non_finite_floats_do_not_encode() {
    assert!(serde_json::to_string(&Value::Float64(f64::NAN)).is_err());
    assert!(serde_json::to_string(&Value::Float64(f64::NEG_INFINITY)).is_err());
    assert!(serde_json::to_string(&Value::List(vec![Value::Float64(f64::INFINITY)])).is_err());
}

#[test]
fn blob_decodes_back_as_text() {
    let json = encode(&Value::Blob(b"hello".to_vec()));
    assert_eq!(decode(&json), v_txt("aGVsbG8="));
}
