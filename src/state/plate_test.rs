use super::*;

fn sample_plate() -> PlateObject {
    serde_json::from_value(serde_json::json!({
        "1": {
            "A01": {
                "1": { "1": "a01-s1-c1.tif", "2": "a01-s1-c2.tif", "3": "a01-s1-c3.tif" },
                "2": { "1": "a01-s2-c1.tif", "2": "a01-s2-c2.tif", "3": "a01-s2-c3.tif" }
            },
            "B02": {
                "1": { "1": "b02-s1-c1.tif", "2": "b02-s1-c2.tif", "3": "b02-s1-c3.tif" },
                "2": { "1": "b02-s2-c1.tif", "2": "b02-s2-c2.tif", "3": "b02-s2-c3.tif" }
            }
        },
        "2": {
            "A01": {
                "1": { "1": "t2-a01-s1-c1.tif", "2": "t2-a01-s1-c2.tif", "3": "t2-a01-s1-c3.tif" },
                "2": { "1": "t2-a01-s2-c1.tif", "2": "t2-a01-s2-c2.tif", "3": "t2-a01-s2-c3.tif" }
            },
            "B02": {
                "1": { "1": "t2-b02-s1-c1.tif", "2": "t2-b02-s1-c2.tif", "3": "t2-b02-s1-c3.tif" },
                "2": { "1": "t2-b02-s2-c1.tif", "2": "t2-b02-s2-c2.tif", "3": "t2-b02-s2-c3.tif" }
            }
        }
    }))
    .unwrap()
}

// =============================================================
// Cardinality counters
// =============================================================

#[test]
fn counts_match_sample_plate() {
    let plate = sample_plate();
    assert_eq!(plate.count_timepoints(), 2);
    assert_eq!(plate.count_wells(), 2);
    assert_eq!(plate.count_wellsamples(), 2);
    assert_eq!(plate.count_channels(), 3);
}

#[test]
fn counts_of_empty_plate_are_zero() {
    let plate = PlateObject::default();
    assert_eq!(plate.count_timepoints(), 0);
    assert_eq!(plate.count_wells(), 0);
    assert_eq!(plate.count_wellsamples(), 0);
    assert_eq!(plate.count_channels(), 0);
}

#[test]
fn counters_read_only_the_first_key() {
    // A ragged plate: the second timepoint has extra wells and channels.
    // The counters still report what the first key path says.
    let plate: PlateObject = serde_json::from_value(serde_json::json!({
        "1": { "A01": { "1": { "1": "a.tif" } } },
        "2": {
            "A01": { "1": { "1": "b.tif", "2": "c.tif" } },
            "B01": { "1": { "1": "d.tif" } }
        }
    }))
    .unwrap();

    assert_eq!(plate.count_timepoints(), 2);
    assert_eq!(plate.count_wells(), 1);
    assert_eq!(plate.count_channels(), 1);
}

// =============================================================
// Lookups
// =============================================================

#[test]
fn channels_lookup_returns_tokens() {
    let plate = sample_plate();
    let channels = plate.channels(2, "B02", 1).unwrap();
    assert_eq!(channels.get(&1).unwrap(), "t2-b02-s1-c1.tif");
}

#[test]
fn channels_lookup_misses_return_none() {
    let plate = sample_plate();
    assert!(plate.channels(3, "A01", 1).is_none());
    assert!(plate.channels(1, "H12", 1).is_none());
    assert!(plate.channels(1, "A01", 9).is_none());
}

#[test]
fn wells_are_in_key_order() {
    let plate = sample_plate();
    assert_eq!(plate.wells(), vec!["A01", "B02"]);
    assert_eq!(plate.first_well().unwrap(), "A01");
    assert!(plate.has_well("B02"));
    assert!(!plate.has_well("C03"));
}

#[test]
fn wells_at_uses_the_requested_timepoint() {
    let plate = sample_plate();
    assert_eq!(plate.wells_at(2), vec!["A01", "B02"]);
    assert!(plate.wells_at(9).is_empty());
}

// =============================================================
// PlateCollection / PlateState
// =============================================================

#[test]
fn collection_exposes_its_single_entry() {
    let collection: PlateCollection = serde_json::from_value(serde_json::json!({
        "plate-042": { "1": { "A01": { "1": { "1": "a.tif" } } } }
    }))
    .unwrap();

    assert_eq!(collection.name().unwrap(), "plate-042");
    assert_eq!(collection.plate().unwrap().count_timepoints(), 1);
}

#[test]
fn empty_state_has_no_loaded_plate() {
    let state = PlateState::default();
    assert!(state.loaded_plate().is_none());
    assert!(state.loaded_plate_name().is_none());
}

// =============================================================
// Well naming
// =============================================================

#[test]
fn well_names_are_zero_padded() {
    assert_eq!(well_name(0, 1), "A01");
    assert_eq!(well_name(0, 12), "A12");
    assert_eq!(well_name(7, 12), "H12");
    assert_eq!(well_name(15, 1), "P01");
}
