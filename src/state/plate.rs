#[cfg(test)]
#[path = "plate_test.rs"]
mod plate_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Channel index (1-based) to opaque image-reference token, as consumed by
/// the image-merge endpoints.
pub type ChannelMap = BTreeMap<u32, String>;

/// Wellsample index (1-based) to that field of view's channel map.
pub type WellObject = BTreeMap<u32, ChannelMap>;

/// Well name (`"A01"`) to well contents.
pub type TimepointObject = BTreeMap<String, WellObject>;

/// One plate: timepoint index (1-based, string-keyed on the wire) to that
/// timepoint's wells.
///
/// The cardinality counters inspect only the first key at each nesting
/// level and assume uniform cardinality across all timepoints, wells, and
/// wellsamples. This matches the wire format the list API produces and is
/// not validated here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlateObject(pub BTreeMap<u32, TimepointObject>);

impl PlateObject {
    pub fn count_timepoints(&self) -> u32 {
        self.0.len() as u32
    }

    pub fn count_wells(&self) -> u32 {
        self.0.values().next().map_or(0, |wells| wells.len() as u32)
    }

    pub fn count_wellsamples(&self) -> u32 {
        self.0
            .values()
            .next()
            .and_then(|wells| wells.values().next())
            .map_or(0, |samples| samples.len() as u32)
    }

    pub fn count_channels(&self) -> u32 {
        self.0
            .values()
            .next()
            .and_then(|wells| wells.values().next())
            .and_then(|samples| samples.values().next())
            .map_or(0, |channels| channels.len() as u32)
    }

    /// Well names of the first timepoint, in key order.
    pub fn wells(&self) -> Vec<String> {
        self.0
            .values()
            .next()
            .map(|wells| wells.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn first_well(&self) -> Option<String> {
        self.0.values().next().and_then(|wells| wells.keys().next().cloned())
    }

    pub fn has_well(&self, well: &str) -> bool {
        self.0.values().next().is_some_and(|wells| wells.contains_key(well))
    }

    /// Channel map for one field of view, if present at this timepoint.
    pub fn channels(&self, timepoint: u32, well: &str, wellsample: u32) -> Option<&ChannelMap> {
        self.0.get(&timepoint)?.get(well)?.get(&wellsample)
    }

    /// Wells present at the given timepoint, in key order.
    pub fn wells_at(&self, timepoint: u32) -> Vec<String> {
        self.0
            .get(&timepoint)
            .map(|wells| wells.keys().cloned().collect())
            .unwrap_or_default()
    }
}

/// Plate name to plate contents. The list API always returns exactly one
/// entry; accessors take the first key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlateCollection(pub BTreeMap<String, PlateObject>);

impl PlateCollection {
    pub fn name(&self) -> Option<&str> {
        self.0.keys().next().map(String::as_str)
    }

    pub fn plate(&self) -> Option<&PlateObject> {
        self.0.values().next()
    }
}

/// The application-owned loaded-plate state. Replaced wholesale on every
/// plate load; there is no incremental merge.
#[derive(Clone, Debug, Default)]
pub struct PlateState {
    pub plates: Option<PlateCollection>,
}

impl PlateState {
    pub fn loaded_plate(&self) -> Option<&PlateObject> {
        self.plates.as_ref()?.plate()
    }

    pub fn loaded_plate_name(&self) -> Option<&str> {
        self.plates.as_ref()?.name()
    }

    /// Wells of the loaded plate's first timepoint; empty when nothing is
    /// loaded.
    pub fn loaded_plate_wells(&self) -> Vec<String> {
        self.loaded_plate().map(PlateObject::wells).unwrap_or_default()
    }
}

/// Rendered plate geometry. Other plate formats are unsupported.
pub const GRID_ROWS: u32 = 8;
pub const GRID_COLS: u32 = 12;

/// Well name from zero-based row and 1-based column: row letter (A..P)
/// plus two-digit zero-padded column, e.g. `well_name(0, 1) == "A01"`.
pub fn well_name(row: u32, col: u32) -> String {
    let letter = char::from(b'A' + row as u8);
    format!("{letter}{col:02}")
}
