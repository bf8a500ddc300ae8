//! Core data model types for studentgen.
//!
//! A `NewStudent` is what the extractor produces from one generated profile;
//! a `StudentRecord` is the same data after the store has assigned an id.

use serde::{Deserialize, Serialize};

/// Placeholder used for text fields the extractor could not locate.
pub const UNKNOWN: &str = "Unknown";

/// A student profile that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    /// Full name, or `"Unknown"`.
    pub name: String,
    /// Age in years, `0` when absent.
    pub age: u32,
    /// Marks, `0` when absent.
    pub marks: u32,
    /// Department, or `"Unknown"`.
    pub department: String,
    /// Hobbies joined with `", "`; empty when none were found.
    pub hobbies: String,
    /// Sports joined with `", "`; empty when none were found.
    pub sport: String,
}

impl Default for NewStudent {
    fn default() -> Self {
        Self {
            name: UNKNOWN.to_string(),
            age: 0,
            marks: 0,
            department: UNKNOWN.to_string(),
            hobbies: String::new(),
            sport: String::new(),
        }
    }
}

/// A persisted student record. Never mutated after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Storage-assigned row id.
    pub id: i64,
    pub name: String,
    pub age: u32,
    pub marks: u32,
    pub department: String,
    pub hobbies: String,
    pub sport: String,
}

impl StudentRecord {
    /// Attach a storage id to an extracted profile.
    pub fn from_new(id: i64, student: NewStudent) -> Self {
        Self {
            id,
            name: student.name,
            age: student.age,
            marks: student.marks,
            department: student.department,
            hobbies: student.hobbies,
            sport: student.sport,
        }
    }

    /// Individual hobby tokens, trimmed, empty tokens dropped.
    pub fn hobby_tokens(&self) -> impl Iterator<Item = &str> {
        split_tokens(&self.hobbies)
    }

    /// Individual sport tokens, trimmed, empty tokens dropped.
    pub fn sport_tokens(&self) -> impl Iterator<Item = &str> {
        split_tokens(&self.sport)
    }
}

fn split_tokens(joined: &str) -> impl Iterator<Item = &str> {
    joined.split(',').map(str::trim).filter(|t| !t.is_empty())
}
