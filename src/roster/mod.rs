mod person;

pub use person::Person;

use crate::error::RosterError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::Path;
use tracing::debug;

/// Load a roster file and shuffle it so strategies don't favour file order
pub fn load_roster<R: Rng + ?Sized>(path: &Path, rng: &mut R) -> Result<Vec<Person>, RosterError> {
    let content = std::fs::read_to_string(path).map_err(|e| RosterError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut people = parse_roster(&content)?;
    people.shuffle(rng);

    debug!("Loaded {} people from {:?}", people.len(), path);
    Ok(people)
}

/// Parse `name,group` lines, skipping blanks and `#` comments.
/// Keeps file order.
pub fn parse_roster(content: &str) -> Result<Vec<Person>, RosterError> {
    let mut people = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        people.push(parse_line(line).ok_or_else(|| RosterError::Malformed {
            line: idx + 1,
            content: line.to_string(),
        })?);
    }

    Ok(people)
}

fn parse_line(line: &str) -> Option<Person> {
    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    let mut fields = compact.split(',');

    let name = fields.next()?;
    let group = fields.next()?;
    if fields.next().is_some() || name.is_empty() || group.is_empty() {
        return None;
    }

    Some(Person::new(name, group))
}
