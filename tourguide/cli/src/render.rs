//! Terminal output. Records go to stdout as pretty JSON.

use serde::Serialize;
use tourguide_lib::{Position, Project, ProjectReview, Resource};

use crate::commands::CliError;

pub fn records<T: Serialize>(records: &[T]) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}

pub fn record<T: Serialize>(record: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(record)?);
    Ok(())
}

pub fn deleted(resource: Resource, id: i64) {
    println!("Deleted {resource} {id}");
}

pub fn review(project: &Project, review: &ProjectReview) {
    print!("{}", review_text(project, review));
}

fn review_text(project: &Project, review: &ProjectReview) -> String {
    let mut out = format!("Project {}: {}\n", project.id, project.title);
    for location in review.locations() {
        let position = Position::extract(&location.location_position);
        out.push_str(&format!(
            "  {} {}  {}  {} / {} points\n",
            location.id,
            location.location_name,
            position,
            location.score_points,
            review.total_score()
        ));
    }
    out.push_str(&format!("Total score: {}\n", review.total_score()));
    out.push_str(&format!(
        "Locations visited: {} / {}\n",
        review.location_count(),
        review.location_count()
    ));
    out
}
