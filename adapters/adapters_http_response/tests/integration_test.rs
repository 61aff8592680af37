//! Integration tests for adapters_http_response crate
//!
//! These tests drive the helpers through both bundled responders.

use adapters_http_response::*;
use entities_values::DynValue;
use serde::Serialize;
use serde_json::json;

#[test]
fn test_response_bad_request() {
    let mut recorder = ResponseRecorder::new();
    JsonResponse::bad_request(&mut recorder, "Bad Request", ()).unwrap();
    assert_eq!(recorder.status(), 400);
    assert_eq!(recorder.header("Content-Type"), Some(JSON_CONTENT_TYPE));
}

#[test]
fn test_response_custom() {
    let mut recorder = ResponseRecorder::new();
    JsonResponse::custom(&mut recorder, 403, true, "Forbidden", ()).unwrap();
    assert_eq!(recorder.status(), 403);
}

#[test]
fn test_response_ok() {
    let mut recorder = ResponseRecorder::new();
    JsonResponse::ok(&mut recorder, "Success", ()).unwrap();
    assert_eq!(recorder.status(), 200);
    assert_eq!(recorder.json().unwrap()["error"], json!(false));
}

#[test]
fn test_struct_body() {
    #[derive(Serialize)]
    struct User {
        id: u32,
        name: &'static str,
    }

    let mut recorder = ResponseRecorder::new();
    JsonResponse::ok(&mut recorder, "found", User { id: 1, name: "ada" }).unwrap();
    assert_eq!(
        recorder.body_str(),
        Some(r#"{"error":false,"message":"found","body":{"id":1,"name":"ada"}}"#)
    );
}

#[test]
fn test_dyn_value_body() {
    let mut recorder = ResponseRecorder::new();
    let body = DynValue::from(vec![DynValue::from("a"), DynValue::from(2u8)]);
    JsonResponse::bad_request(&mut recorder, "invalid", &body).unwrap();
    assert_eq!(recorder.json().unwrap()["body"], json!(["a", 2]));
}

#[test]
fn test_http_writer_bad_request() {
    let mut writer = HttpResponseWriter::new(Vec::new());
    JsonResponse::bad_request(&mut writer, "Bad Request", ()).unwrap();

    let text = String::from_utf8(writer.into_inner()).unwrap();
    let body = r#"{"error":true,"message":"Bad Request","body":null}"#;
    assert!(text.starts_with("HTTP/1.1 400 Bad Request\r\n"));
    assert!(text.contains(&format!("Content-Length: {}\r\n", body.len())));
    assert!(text.ends_with(&format!("\r\n\r\n{}", body)));
}

#[test]
fn test_http_writer_custom_status_line() {
    let mut writer = HttpResponseWriter::new(Vec::new());
    JsonResponse::custom(&mut writer, 403, false, "Forbidden", ()).unwrap();

    let text = String::from_utf8(writer.get_ref().clone()).unwrap();
    assert!(text.starts_with("HTTP/1.1 403 Forbidden\r\n"));
    assert!(text.contains(r#""error":true"#));
}
