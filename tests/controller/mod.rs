//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors; the router tests send requests
//! through the full axum router.

mod breach;
mod router;

use axum::response::Response;
use breachwatch_test_utils::prelude::*;
use serde::de::DeserializeOwned;

use crate::util::TestContextExt;

/// Reads a JSON response body
async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
