#[cfg(test)]
#[path = "urls_test.rs"]
mod urls_test;

use crate::state::plate::ChannelMap;
use crate::state::selection::{ChannelSelection, SelectionState};

/// Token the merge endpoints receive for a channel slot with no image.
/// The server accepts the literal string; it is not guarded against here.
const UNDEFINED_TOKEN: &str = "undefined";

/// Full-resolution merge-image URL for one field of view.
pub fn merge_image_url(channels: &ChannelMap, selection: &ChannelSelection) -> String {
    merge_url("/api/image-merge", channels, selection)
}

/// Thumbnail merge-image URL for one field of view.
pub fn merge_thumb_url(channels: &ChannelMap, selection: &ChannelSelection) -> String {
    merge_url("/api/image-merge-thumb", channels, selection)
}

/// Deep link to the full-resolution viewer page. `image_url` is a merge
/// URL beginning with `/` and rides as the trailing path segments.
pub fn viewer_url(plate: &str, selection: &SelectionState, well: &str, image_url: &str) -> String {
    format!(
        "/image-viewer/{plate}/{timepoint}/{well}/{wellsample}/{channel}{image_url}",
        timepoint = selection.timepoint,
        wellsample = selection.wellsample,
        channel = selection.channel,
    )
}

/// Compose a merge URL.
///
/// A merge token, or the single-channel token on a 1-channel plate,
/// requests a 3-channel merge using whatever tokens channels 1..=3 have.
/// Any other single selection fills slot 1 only. Channel indices absent
/// from the map resolve to the literal `"undefined"` either way.
fn merge_url(prefix: &str, channels: &ChannelMap, selection: &ChannelSelection) -> String {
    let (ch1, ch2, ch3) = match selection {
        ChannelSelection::MergeTwo | ChannelSelection::MergeThree => {
            (token(channels, 1), token(channels, 2), token(channels, 3))
        }
        ChannelSelection::Single(1) if channels.len() == 1 => {
            (token(channels, 1), token(channels, 2), token(channels, 3))
        }
        ChannelSelection::Single(n) => (token(channels, *n), UNDEFINED_TOKEN, UNDEFINED_TOKEN),
    };
    format!("{prefix}/ch1/{ch1}/ch2/{ch2}/ch3/{ch3}/channels.png")
}

fn token(channels: &ChannelMap, index: u32) -> &str {
    channels.get(&index).map_or(UNDEFINED_TOKEN, String::as_str)
}
