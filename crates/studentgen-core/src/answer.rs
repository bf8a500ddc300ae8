//! Keyword-triggered question answering over stored student records.
//!
//! A question is lowercased and checked against a fixed, ordered list of
//! trigger phrases. The first phrase contained in the question selects the
//! computation. There is no further language understanding.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AnswerError;
use crate::model::StudentRecord;
use crate::statistics::{distinct_sorted, frequency, highest_group_mean, mean, mode};

/// Reply for questions that match no trigger.
pub const NOT_UNDERSTOOD: &str = "Sorry, I couldn't understand the question.";

/// The result of answering a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Answer {
    /// A single sentence.
    Scalar(String),
    /// Distinct values in ascending order.
    List(Vec<String>),
    /// Marks value to number of students with that value.
    Frequency(BTreeMap<u32, usize>),
}

/// The analytic questions studentgen understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query {
    AverageAge,
    HighestMarks,
    ComputerScienceCount,
    CommonHobby,
    MarksDistribution,
    HighestAverageMarks,
    AllNames,
    AllAges,
    AllHobbies,
    AllDepartments,
    AllSports,
}

impl Query {
    /// Every query, in dispatch order.
    pub const ALL: [Query; 11] = [
        Query::AverageAge,
        Query::HighestMarks,
        Query::ComputerScienceCount,
        Query::CommonHobby,
        Query::MarksDistribution,
        Query::HighestAverageMarks,
        Query::AllNames,
        Query::AllAges,
        Query::AllHobbies,
        Query::AllDepartments,
        Query::AllSports,
    ];

    /// The lowercase phrase that selects this query.
    pub fn trigger(self) -> &'static str {
        match self {
            Query::AverageAge => "average age",
            Query::HighestMarks => "highest marks",
            Query::ComputerScienceCount => "students in the computer science department",
            Query::CommonHobby => "common hobbies",
            Query::MarksDistribution => "distribution of marks",
            Query::HighestAverageMarks => "highest average marks",
            Query::AllNames => "all student names",
            Query::AllAges => "all student ages",
            Query::AllHobbies => "all student hobbies",
            Query::AllDepartments => "all student departments",
            Query::AllSports => "all student sports",
        }
    }

    /// Heading used when presenting the answer.
    pub fn label(self) -> &'static str {
        match self {
            Query::AverageAge => "Average age",
            Query::HighestMarks => "Highest marks",
            Query::ComputerScienceCount => "Computer Science students",
            Query::CommonHobby => "Most common hobby",
            Query::MarksDistribution => "Distribution of marks",
            Query::HighestAverageMarks => "Top department by average marks",
            Query::AllNames => "Student names",
            Query::AllAges => "Student ages",
            Query::AllHobbies => "Student hobbies",
            Query::AllDepartments => "Student departments",
            Query::AllSports => "Student sports",
        }
    }

    /// Classify a free-text question. First matching trigger wins.
    pub fn parse(question: &str) -> Option<Query> {
        let question = question.to_lowercase();
        Query::ALL
            .into_iter()
            .find(|q| question.contains(q.trigger()))
    }

    /// Run this query over `records`.
    pub fn evaluate(self, records: &[StudentRecord]) -> Result<Answer, AnswerError> {
        let no_data = AnswerError::NoData {
            query: self.trigger(),
        };

        let answer = match self {
            Query::AverageAge => {
                let ages: Vec<u32> = records.iter().map(|r| r.age).collect();
                let avg = mean(&ages).ok_or(no_data)?;
                Answer::Scalar(format!("The average age of the students is {avg:.2} years."))
            }
            Query::HighestMarks => {
                let highest = records.iter().map(|r| r.marks).max().ok_or(no_data)?;
                Answer::Scalar(format!("The highest marks achieved is {highest}."))
            }
            Query::ComputerScienceCount => {
                let count = records
                    .iter()
                    .filter(|r| r.department.to_lowercase().contains("computer science"))
                    .count();
                Answer::Scalar(format!(
                    "There are {count} students in the Computer Science department."
                ))
            }
            Query::CommonHobby => {
                let hobby = mode(records.iter().flat_map(|r| r.hobby_tokens())).ok_or(no_data)?;
                Answer::Scalar(format!("The most common hobby among students is {hobby}."))
            }
            Query::MarksDistribution => {
                Answer::Frequency(frequency(records.iter().map(|r| r.marks)))
            }
            Query::HighestAverageMarks => {
                let (department, _) =
                    highest_group_mean(records.iter().map(|r| (r.department.as_str(), r.marks)))
                        .ok_or(no_data)?;
                Answer::Scalar(format!(
                    "The department with the highest average marks is {department}."
                ))
            }
            Query::AllNames => strings(distinct_sorted(records.iter().map(|r| r.name.as_str()))),
            Query::AllAges => strings(distinct_sorted(records.iter().map(|r| r.age))),
            Query::AllHobbies => {
                strings(distinct_sorted(records.iter().flat_map(|r| r.hobby_tokens())))
            }
            Query::AllDepartments => {
                strings(distinct_sorted(records.iter().map(|r| r.department.as_str())))
            }
            Query::AllSports => {
                strings(distinct_sorted(records.iter().flat_map(|r| r.sport_tokens())))
            }
        };
        Ok(answer)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.trigger())
    }
}

fn strings<T: ToString>(values: Vec<T>) -> Answer {
    Answer::List(values.iter().map(ToString::to_string).collect())
}

/// Answer a free-text question over `records`.
///
/// Unrecognised questions yield [`NOT_UNDERSTOOD`] as a scalar answer.
pub fn answer(question: &str, records: &[StudentRecord]) -> Result<Answer, AnswerError> {
    match Query::parse(question) {
        Some(query) => {
            tracing::debug!(%query, records = records.len(), "answering question");
            query.evaluate(records)
        }
        None => Ok(Answer::Scalar(NOT_UNDERSTOOD.to_string())),
    }
}
