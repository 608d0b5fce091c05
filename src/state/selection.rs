#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::fmt;
use std::str::FromStr;

use crate::state::plate::PlateObject;

/// Value of the channel selector: one channel index, or a merge shortcut
/// asking the server to composite the first two or three channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelSelection {
    Single(u32),
    /// Selector token `"1-2"`, offered when exactly two channels exist.
    MergeTwo,
    /// Selector token `"1-3"`, offered when three or more channels exist.
    MergeThree,
}

impl fmt::Display for ChannelSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(n) => write!(f, "{n}"),
            Self::MergeTwo => write!(f, "1-2"),
            Self::MergeThree => write!(f, "1-3"),
        }
    }
}

impl FromStr for ChannelSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1-2" => Ok(Self::MergeTwo),
            "1-3" => Ok(Self::MergeThree),
            other => other
                .parse::<u32>()
                .map(Self::Single)
                .map_err(|_| format!("not a channel selection: {other}")),
        }
    }
}

/// Channel selector options for a plate with `n` channels: the merge
/// shortcut (when applicable) first, then every individual channel.
pub fn channel_options(n: u32) -> Vec<ChannelSelection> {
    let mut options = Vec::new();
    if n == 2 {
        options.push(ChannelSelection::MergeTwo);
    } else if n >= 3 {
        options.push(ChannelSelection::MergeThree);
    }
    options.extend((1..=n).map(ChannelSelection::Single));
    options
}

/// What to do when a deep-linked selection does not match the loaded plate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RestorePolicy {
    /// Snap out-of-range indices and unknown wells to the nearest valid
    /// value.
    #[default]
    Clamp,
    /// Keep the prior selection for any field that does not match.
    Ignore,
}

/// The canonical selection. Selectors, the slider, the grid, and the
/// viewer are all views over this struct.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionState {
    pub timepoint: u32,
    pub well: String,
    pub wellsample: u32,
    pub channel: ChannelSelection,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            timepoint: 1,
            well: String::new(),
            wellsample: 1,
            channel: ChannelSelection::Single(1),
        }
    }
}

impl SelectionState {
    /// Fresh selection for a newly loaded plate: first timepoint, first
    /// well, first wellsample, and the merge-default channel option.
    pub fn reset_for(plate: &PlateObject) -> Self {
        Self {
            timepoint: 1,
            well: plate.first_well().unwrap_or_default(),
            wellsample: 1,
            channel: default_channel(plate),
        }
    }

    /// Apply a deep-linked selection against a freshly loaded plate.
    ///
    /// Each field is taken from `requested` when it is valid for the plate;
    /// mismatches are resolved per `policy` (`self` holds the prior
    /// selection that `RestorePolicy::Ignore` falls back to).
    pub fn restored(
        &self,
        plate: &PlateObject,
        requested: &SelectionState,
        policy: RestorePolicy,
    ) -> Self {
        let tp_count = plate.count_timepoints();
        let timepoint = if (1..=tp_count).contains(&requested.timepoint) {
            requested.timepoint
        } else {
            match policy {
                RestorePolicy::Clamp => requested.timepoint.clamp(1, tp_count.max(1)),
                RestorePolicy::Ignore => self.timepoint,
            }
        };

        let well = if plate.has_well(&requested.well) {
            requested.well.clone()
        } else {
            match policy {
                RestorePolicy::Clamp => plate.first_well().unwrap_or_default(),
                RestorePolicy::Ignore => self.well.clone(),
            }
        };

        let ws_count = plate.count_wellsamples();
        let wellsample = if (1..=ws_count).contains(&requested.wellsample) {
            requested.wellsample
        } else {
            match policy {
                RestorePolicy::Clamp => requested.wellsample.clamp(1, ws_count.max(1)),
                RestorePolicy::Ignore => self.wellsample,
            }
        };

        let channel = if channel_options(plate.count_channels()).contains(&requested.channel) {
            requested.channel
        } else {
            match policy {
                RestorePolicy::Clamp => default_channel(plate),
                RestorePolicy::Ignore => self.channel,
            }
        };

        Self { timepoint, well, wellsample, channel }
    }
}

fn default_channel(plate: &PlateObject) -> ChannelSelection {
    channel_options(plate.count_channels())
        .first()
        .copied()
        .unwrap_or(ChannelSelection::Single(1))
}
