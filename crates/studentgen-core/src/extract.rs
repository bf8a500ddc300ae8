//! Free-text profile extraction.
//!
//! Generated profiles follow a loose markdown template:
//!
//! ```text
//! **Name:** Priya Sharma
//! **Age:** 21
//! **Marks:** 88
//! **Department:** Computer Science
//! **Hobbies:**
//! * Reading
//! * Painting
//! **Sport:**
//! * Badminton
//! ```
//!
//! Extraction never fails. Anything that cannot be located falls back to the
//! defaults on [`NewStudent`].

use crate::model::NewStudent;

/// A marker-delimited list section of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    /// From `**Hobbies:**` up to the next `**Sport:**`.
    Hobbies,
    /// From `**Sport:**` to the end of the text.
    Sport,
}

impl Section {
    fn marker(self) -> &'static str {
        match self {
            Section::Hobbies => "**Hobbies:**",
            Section::Sport => "**Sport:**",
        }
    }

    /// Slice the section body out of `text`.
    ///
    /// The hobbies section ends at the first sport marker after it, even when
    /// that marker sits in the middle of a line. Without a closing marker the
    /// section does not exist.
    fn locate(self, text: &str) -> Option<&str> {
        let start = text.find(self.marker())? + self.marker().len();
        let rest = &text[start..];
        match self {
            Section::Hobbies => {
                let end = rest.find(Section::Sport.marker())?;
                Some(&rest[..end])
            }
            Section::Sport => Some(rest),
        }
    }
}

/// Parse one generated profile into a [`NewStudent`].
pub fn extract(text: &str) -> NewStudent {
    let defaults = NewStudent::default();

    NewStudent {
        name: first_text(text, "Name").unwrap_or(defaults.name),
        age: first_number(text, "Age").unwrap_or(0),
        marks: first_number(text, "Marks").unwrap_or(0),
        department: first_text(text, "Department").unwrap_or(defaults.department),
        hobbies: section_items(text, Section::Hobbies).join(", "),
        sport: section_items(text, Section::Sport).join(", "),
    }
}

/// Every value written as `**<label>:** <value>`, in order of appearance.
///
/// The value runs to the end of its line and is trimmed. Lines where the
/// value is blank are skipped.
fn field_values<'a>(text: &'a str, label: &str) -> impl Iterator<Item = &'a str> {
    let marker = format!("**{label}:**");
    text.lines().filter_map(move |line| {
        let start = line.find(&marker)? + marker.len();
        let value = line[start..].trim();
        (!value.is_empty()).then_some(value)
    })
}

fn first_text(text: &str, label: &str) -> Option<String> {
    field_values(text, label).next().map(str::to_string)
}

/// First occurrence of `label` whose value starts with digits.
fn first_number(text: &str, label: &str) -> Option<u32> {
    field_values(text, label).find_map(leading_number)
}

fn leading_number(value: &str) -> Option<u32> {
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value[..end].parse().ok()
}

fn section_items(text: &str, section: Section) -> Vec<&str> {
    section.locate(text).map(list_items).unwrap_or_default()
}

/// Split a section body into items, one per non-blank line.
///
/// Bullet stars and whitespace are stripped from both ends of each line;
/// lines that strip down to nothing are dropped.
fn list_items(body: &str) -> Vec<&str> {
    body.lines()
        .map(|line| line.trim_matches(|c: char| c == '*' || c.is_whitespace()))
        .filter(|item| !item.is_empty())
        .collect()
}
