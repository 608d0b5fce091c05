use super::*;

fn channels(tokens: &[&str]) -> ChannelMap {
    tokens
        .iter()
        .enumerate()
        .map(|(i, tok)| (i as u32 + 1, (*tok).to_owned()))
        .collect()
}

// =============================================================
// Merge tokens
// =============================================================

#[test]
fn merge_three_uses_the_first_three_tokens() {
    let map = channels(&["imgA", "imgB", "imgC"]);
    assert_eq!(
        merge_thumb_url(&map, &ChannelSelection::MergeThree),
        "/api/image-merge-thumb/ch1/imgA/ch2/imgB/ch3/imgC/channels.png"
    );
    assert_eq!(
        merge_image_url(&map, &ChannelSelection::MergeThree),
        "/api/image-merge/ch1/imgA/ch2/imgB/ch3/imgC/channels.png"
    );
}

#[test]
fn merge_beyond_the_channel_count_emits_undefined() {
    let map = channels(&["imgA", "imgB"]);
    assert_eq!(
        merge_image_url(&map, &ChannelSelection::MergeTwo),
        "/api/image-merge/ch1/imgA/ch2/imgB/ch3/undefined/channels.png"
    );
}

// =============================================================
// Single-channel selections
// =============================================================

#[test]
fn single_selection_fills_slot_one_only() {
    let map = channels(&["imgA", "imgB", "imgC"]);
    assert_eq!(
        merge_thumb_url(&map, &ChannelSelection::Single(2)),
        "/api/image-merge-thumb/ch1/imgB/ch2/undefined/ch3/undefined/channels.png"
    );
}

#[test]
fn single_token_on_a_one_channel_plate_requests_a_full_merge() {
    // Channels 2 and 3 do not exist, so the merge degenerates to the same
    // URL a plain single selection would produce.
    let map = channels(&["imgA"]);
    assert_eq!(
        merge_image_url(&map, &ChannelSelection::Single(1)),
        "/api/image-merge/ch1/imgA/ch2/undefined/ch3/undefined/channels.png"
    );
}

#[test]
fn out_of_range_single_selection_becomes_undefined() {
    let map = channels(&["imgA", "imgB"]);
    assert_eq!(
        merge_image_url(&map, &ChannelSelection::Single(7)),
        "/api/image-merge/ch1/undefined/ch2/undefined/ch3/undefined/channels.png"
    );
}

// =============================================================
// Viewer deep link
// =============================================================

#[test]
fn viewer_url_embeds_selection_and_image_path() {
    let selection = SelectionState {
        timepoint: 3,
        well: "A01".to_owned(),
        wellsample: 2,
        channel: ChannelSelection::MergeThree,
    };
    let image = "/api/image-merge/ch1/imgA/ch2/imgB/ch3/imgC/channels.png";
    assert_eq!(
        viewer_url("P001", &selection, "B05", image),
        "/image-viewer/P001/3/B05/2/1-3/api/image-merge/ch1/imgA/ch2/imgB/ch3/imgC/channels.png"
    );
}
