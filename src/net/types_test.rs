use super::*;

// =============================================================
// /api/query response
// =============================================================

#[test]
fn query_response_parses_and_ignores_extras() {
    let body = r#"{
        "results": [
            {"_id": {"project": "exp-alpha", "plate": "P001"}, "count": 96},
            {"_id": {"project": "exp-beta", "plate": "P010"}}
        ]
    }"#;

    let parsed: QueryResponse = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.results.len(), 2);
    assert_eq!(
        parsed.results[0].id,
        PlateId { project: "exp-alpha".to_owned(), plate: "P001".to_owned() }
    );
}

#[test]
fn query_response_may_be_empty() {
    let parsed: QueryResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
    assert!(parsed.results.is_empty());
}

// =============================================================
// /api/list/:plate response
// =============================================================

#[test]
fn list_response_parses_the_nested_plate() {
    let body = r#"{
        "data": {
            "plates": {
                "P001": {
                    "1": {
                        "A01": {
                            "1": {"1": "a.tif", "2": "b.tif"}
                        }
                    }
                }
            }
        }
    }"#;

    let parsed: PlateListResponse = serde_json::from_str(body).unwrap();
    let plates = parsed.data.plates;
    assert_eq!(plates.name().unwrap(), "P001");

    let plate = plates.plate().unwrap();
    assert_eq!(plate.count_timepoints(), 1);
    assert_eq!(plate.count_channels(), 2);
    assert_eq!(plate.channels(1, "A01", 1).unwrap().get(&2).unwrap(), "b.tif");
}
