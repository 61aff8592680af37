//! Response Facades
//!
//! Flat entry points for the JSON envelope response helpers.

use adapters_http_response::{JsonResponder, JsonResponse, ResponseError};
use serde::Serialize;

/// Write `{error: true, message, body}` with status 400
pub fn response_bad_request<R, T>(ctx: &mut R, message: &str, body: T) -> Result<(), ResponseError>
where
    R: JsonResponder + ?Sized,
    T: Serialize,
{
    JsonResponse::bad_request(ctx, message, body)
}

/// Write `{error: true, message, body}` with status `code`
///
/// `error_flag` does not reach the envelope; `error` is always `true`.
pub fn response_custom<R, T>(
    ctx: &mut R,
    code: u16,
    error_flag: bool,
    message: &str,
    body: T,
) -> Result<(), ResponseError>
where
    R: JsonResponder + ?Sized,
    T: Serialize,
{
    JsonResponse::custom(ctx, code, error_flag, message, body)
}

/// Write `{error: false, message, body}` with status 200
pub fn response_ok<R, T>(ctx: &mut R, message: &str, body: T) -> Result<(), ResponseError>
where
    R: JsonResponder + ?Sized,
    T: Serialize,
{
    JsonResponse::ok(ctx, message, body)
}
