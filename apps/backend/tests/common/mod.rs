#![allow(dead_code)]

use serde_json::Value;

// Logging is auto-installed for every test binary that pulls this module in.
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Parse a response body into JSON, with a readable failure message.
pub fn json_body(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap_or_else(|e| {
        panic!(
            "response body should be valid JSON: {e}; got {}",
            String::from_utf8_lossy(body)
        )
    })
}
