use crate::assign::Assignments;
use crate::roster::Person;

/// Gerrit search for open changes owned by any of the committers, newest
/// assignment first
pub fn gerrit_query(base_url: &str, committers: &[Person]) -> String {
    let owners = committers
        .iter()
        .rev()
        .map(|c| format!("owner:{}", c.name()))
        .collect::<Vec<_>>()
        .join("+OR+");

    format!("{}/({})+AND+status:open", base_url, owners)
}

fn name_list(committers: &[Person]) -> String {
    let names = committers
        .iter()
        .map(Person::name)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", names)
}

/// Render one line per busy reviewer, each followed by its Gerrit query when
/// a base URL is given
pub fn render(assignments: &Assignments, gerrit_url: Option<&str>) -> String {
    let mut out = String::new();

    for assignment in assignments.non_empty() {
        out.push_str(&format!(
            "{} to review {}\n",
            assignment.reviewer,
            name_list(&assignment.committers)
        ));

        if let Some(base_url) = gerrit_url {
            out.push_str(&gerrit_query(base_url, &assignment.committers));
            out.push_str("\n\n");
        }
    }

    out
}
