//! Integration tests for infrastructure_utilities crate
//!
//! These tests exercise the helpers the way callers combine them.

use entities_values::DynValue;
use infrastructure_utilities::*;
use std::env;

#[test]
fn test_getenv_lifecycle() {
    let key = "INFRA_UTILS_IT_LIFECYCLE";

    env::remove_var(key);
    assert_eq!(EnvUtils::getenv(key, "fallback"), "fallback");

    env::set_var(key, "value");
    assert_eq!(EnvUtils::getenv(key, "fallback"), "value");

    env::set_var(key, "");
    assert_eq!(EnvUtils::getenv(key, "fallback"), "fallback");
}

#[test]
fn test_getenv_parsed_feeds_coercion() {
    env::set_var("INFRA_UTILS_IT_WORKERS", "12");
    let workers: u64 = EnvUtils::getenv_parsed("INFRA_UTILS_IT_WORKERS", 1);
    assert_eq!(CoercionUtils::to_int(&DynValue::from(workers)), Ok(12));
}

#[test]
fn test_check_string_on_mixed_inputs() {
    let inputs: Vec<DynValue> = vec![
        DynValue::from("hello"),
        DynValue::from(""),
        DynValue::from(123i32),
        DynValue::from(vec![1, 2, 3]),
        DynValue::from("   "),
    ];
    let results: Vec<bool> = inputs.iter().map(|v| StringUtils::check_string(v)).collect();
    assert_eq!(results, vec![true, false, false, false, true]);
}

#[test]
fn test_to_int_table() {
    let cases: Vec<(&str, DynValue, Option<isize>)> = vec![
        ("int", DynValue::from(10isize), Some(10)),
        ("int8", DynValue::from(20i8), Some(20)),
        ("int16", DynValue::from(30i16), Some(30)),
        ("int32", DynValue::from(40i32), Some(40)),
        ("int64", DynValue::from(50i64), Some(50)),
        ("uint", DynValue::from(60usize), Some(60)),
        ("uint8", DynValue::from(70u8), Some(70)),
        ("uint16", DynValue::from(80u16), Some(80)),
        ("uint32", DynValue::from(90u32), Some(90)),
        ("uint64 overflow", DynValue::from(u64::MAX), None),
        ("float32", DynValue::from(1.5f32), Some(1)),
        ("float64", DynValue::from(2.7f64), Some(2)),
        ("unsupported type", DynValue::from("invalid"), None),
    ];

    for (name, input, want) in cases {
        let got = CoercionUtils::to_int(&input);
        match want {
            Some(expected) => assert_eq!(got, Ok(expected), "case {}", name),
            None => assert!(got.is_err(), "case {} should fail, got {:?}", name, got),
        }
    }
}

#[test]
fn test_to_int_any_unsupported_struct() {
    struct Opaque;
    match CoercionUtils::to_int_any(&Opaque) {
        Err(CoercionError::UnsupportedType(name)) => assert!(name.ends_with("Opaque")),
        other => panic!("expected unsupported type, got {:?}", other),
    }
}

#[test]
fn test_dot_product_both_precisions() {
    assert_eq!(
        VectorUtils::dot_product(&[1.0f64, 2.0, 3.0], &[4.0, 5.0, 6.0]),
        Ok(32.0)
    );
    assert_eq!(
        VectorUtils::dot_product(&[1.0f32, 2.0, 3.0], &[4.0, 5.0, 6.0]),
        Ok(32.0f32)
    );
}

#[test]
fn test_dot_product_mismatch_is_error() {
    let err = VectorUtils::dot_product(&[1.0, 2.0, 3.0], &[4.0, 5.0]).unwrap_err();
    assert_eq!(err, VectorError::LengthMismatch { left: 3, right: 2 });
    let _: &dyn std::error::Error = &err;
}
