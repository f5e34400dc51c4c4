use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Form fields that can carry an error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Description,
    Day,
    Month,
    Date,
}

impl Field {
    /// Inputs in the order the dialog shows them.
    pub const INPUTS: [Field; 4] = [Field::Title, Field::Description, Field::Day, Field::Month];

    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Day => "day",
            Field::Month => "month",
            Field::Date => "date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Title => "Title",
            Field::Description => "Description",
            Field::Day => "Day",
            Field::Month => "Month",
            Field::Date => "Date",
        };
        f.write_str(label)
    }
}

/// Raw text as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub day: String,
    pub month: String,
}

impl TaskDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::Day => &self.day,
            Field::Month => &self.month,
            Field::Date => "",
        }
    }

    /// Mutable access to an input's text. `Field::Date` is not an input.
    pub fn get_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Title => Some(&mut self.title),
            Field::Description => Some(&mut self.description),
            Field::Day => Some(&mut self.day),
            Field::Month => Some(&mut self.month),
            Field::Date => None,
        }
    }
}

/// A draft whose day and month have been resolved into a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
}

/// A record that passed validation. Only the validator builds these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTask(NewTask);

impl ValidTask {
    pub(crate) fn new(task: NewTask) -> Self {
        Self(task)
    }

    pub fn into_inner(self) -> NewTask {
        self.0
    }
}

pub type TaskId = u32;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
}

impl Task {
    pub fn from_valid(id: TaskId, valid: ValidTask) -> Self {
        let NewTask {
            title,
            description,
            date,
        } = valid.into_inner();
        Self {
            id,
            title,
            description,
            date,
        }
    }
}
