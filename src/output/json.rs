use super::text::gerrit_query;
use crate::assign::{Assignments, Strategy};
use crate::error::OutputError;
use crate::roster::Person;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub generated_at: String,
    pub strategy: String,
    pub assignments: Vec<JsonAssignment<'a>>,
}

#[derive(Debug, Serialize)]
pub struct JsonAssignment<'a> {
    pub reviewer: &'a Person,
    pub committers: &'a [Person],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gerrit_query: Option<String>,
}

pub fn build_report<'a>(
    assignments: &'a Assignments,
    strategy: Strategy,
    gerrit_url: Option<&str>,
) -> JsonReport<'a> {
    let assignments = assignments
        .non_empty()
        .map(|a| JsonAssignment {
            reviewer: &a.reviewer,
            committers: &a.committers,
            gerrit_query: gerrit_url.map(|url| gerrit_query(url, &a.committers)),
        })
        .collect();

    JsonReport {
        generated_at: Utc::now().to_rfc3339(),
        strategy: strategy.to_string(),
        assignments,
    }
}

pub fn render(
    assignments: &Assignments,
    strategy: Strategy,
    gerrit_url: Option<&str>,
) -> Result<String, OutputError> {
    let report = build_report(assignments, strategy, gerrit_url);
    Ok(serde_json::to_string_pretty(&report)?)
}
