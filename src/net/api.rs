//! REST API helpers for the query and plate-list endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics; transport and decode
//! failures are logged at the call site and leave the UI in its last-good
//! state.

#![allow(clippy::unused_async)]

use crate::state::plate::PlateCollection;

/// Run the query form against `POST /api/query` and return the matching
/// project/plate pairs, in server order.
///
/// # Errors
///
/// Returns an error string on transport, HTTP, or decode failure.
#[cfg(feature = "hydrate")]
pub async fn query_plates(
    form: web_sys::FormData,
) -> Result<Vec<crate::net::types::PlateId>, String> {
    use crate::net::types::QueryResponse;

    let resp = gloo_net::http::Request::post("/api/query")
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("query failed: {}", resp.status()));
    }
    let body: QueryResponse = resp.json().await.map_err(|e| e.to_string())?;
    Ok(body.results.into_iter().map(|hit| hit.id).collect())
}

/// Fetch a plate's full nested structure from `GET /api/list/:plate`.
///
/// # Errors
///
/// Returns an error string on transport, HTTP, or decode failure, and on
/// the server where no fetch is available.
pub async fn fetch_plate(plate_name: &str) -> Result<PlateCollection, String> {
    #[cfg(feature = "hydrate")]
    {
        use crate::net::types::PlateListResponse;

        let url = format!("/api/list/{plate_name}");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("list failed: {}", resp.status()));
        }
        let body: PlateListResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.data.plates)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = plate_name;
        Err("not available on server".to_owned())
    }
}
