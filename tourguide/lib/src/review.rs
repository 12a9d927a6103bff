//! Per-project score and visit totals.

use crate::model::Location;

/// Aggregate view of one project's locations.
///
/// Every location of the project counts as visited, so
/// [`ProjectReview::location_count`] is both the visited and the total count.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectReview {
    project_id: i64,
    locations: Vec<Location>,
    total_score: i64,
}

impl ProjectReview {
    /// Selects the locations belonging to `project_id` and totals their points.
    pub fn build(project_id: i64, locations: &[Location]) -> Self {
        let locations: Vec<Location> = locations
            .iter()
            .filter(|loc| loc.project_id == project_id)
            .cloned()
            .collect();
        let total_score = locations
            .iter()
            .fold(0i64, |total, loc| total.saturating_add(loc.score_points));

        Self {
            project_id,
            locations,
            total_score,
        }
    }

    pub fn project_id(&self) -> i64 {
        self.project_id
    }

    /// The project's locations, in backend order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Sum of `score_points` over the project's locations.
    pub fn total_score(&self) -> i64 {
        self.total_score
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Points for one of the project's locations, or `None` if it is not part
    /// of this project.
    pub fn points_for(&self, location_id: i64) -> Option<i64> {
        self.locations
            .iter()
            .find(|loc| loc.id == location_id)
            .map(|loc| loc.score_points)
    }
}
