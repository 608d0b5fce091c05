use super::*;

fn hit(project: &str, plate: &str) -> PlateId {
    PlateId { project: project.to_owned(), plate: plate.to_owned() }
}

// =============================================================
// group_by_project
// =============================================================

#[test]
fn sorted_results_yield_one_group_per_project() {
    let results = [
        hit("exp-alpha", "P001"),
        hit("exp-alpha", "P002"),
        hit("exp-beta", "P010"),
        hit("exp-gamma", "P020"),
        hit("exp-gamma", "P021"),
    ];

    let groups = group_by_project(&results);
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].project, "exp-alpha");
    assert_eq!(groups[0].plates, vec!["P001", "P002"]);
    assert_eq!(groups[1].project, "exp-beta");
    assert_eq!(groups[2].project, "exp-gamma");
}

#[test]
fn groups_keep_first_seen_order() {
    let results = [hit("zeta", "P1"), hit("alpha", "P2")];
    let groups = group_by_project(&results);
    assert_eq!(groups[0].project, "zeta");
    assert_eq!(groups[1].project, "alpha");
}

#[test]
fn unsorted_results_produce_duplicate_groups() {
    // Grouping is stream-adjacent, not a full group-by.
    let results = [hit("a", "P1"), hit("b", "P2"), hit("a", "P3")];
    let groups = group_by_project(&results);
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].project, "a");
    assert_eq!(groups[2].project, "a");
}

#[test]
fn empty_results_yield_no_groups() {
    assert!(group_by_project(&[]).is_empty());
}
