#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

use crate::state::plate::PlateCollection;

/// Response body of `POST /api/query`.
#[derive(Clone, Debug, Deserialize)]
pub struct QueryResponse {
    pub results: Vec<QueryHit>,
}

/// One query result. The aggregation key rides under `_id`; any other
/// fields in the document are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct QueryHit {
    #[serde(rename = "_id")]
    pub id: PlateId,
}

/// Project/plate pair identifying one plate in the sidebar.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PlateId {
    pub project: String,
    pub plate: String,
}

/// Response body of `GET /api/list/:plate`.
#[derive(Clone, Debug, Deserialize)]
pub struct PlateListResponse {
    pub data: PlateListData,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PlateListData {
    pub plates: PlateCollection,
}
