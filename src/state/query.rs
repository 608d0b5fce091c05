#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::net::types::PlateId;

/// State for the query form and its sidebar result tree.
#[derive(Clone, Debug, Default)]
pub struct QueryState {
    /// True while a query request is in flight; drives the busy spinner.
    /// Cleared on both the success and the failure path.
    pub busy: bool,
    pub results: Vec<PlateId>,
}

/// One collapsible sidebar group: a project and its plates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectGroup {
    pub project: String,
    pub plates: Vec<String>,
}

/// Group query results by project, stream-adjacent.
///
/// Only consecutive results sharing a project fold into one group. The
/// query API returns results ordered by project, which yields exactly one
/// group per project; unsorted input produces duplicate groups and that is
/// accepted.
pub fn group_by_project(results: &[PlateId]) -> Vec<ProjectGroup> {
    let mut groups: Vec<ProjectGroup> = Vec::new();
    for hit in results {
        match groups.last_mut() {
            Some(group) if group.project == hit.project => {
                group.plates.push(hit.plate.clone());
            }
            _ => groups.push(ProjectGroup {
                project: hit.project.clone(),
                plates: vec![hit.plate.clone()],
            }),
        }
    }
    groups
}
