use crate::task::{Field, NewTask, ValidTask};
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub const TITLE_MAX_LEN: usize = 12;
pub const DESCRIPTION_MAX_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Day or month invalid")]
    InvalidDayOrMonth,
    #[error("{0} is required.")]
    EmptyField(Field),
    #[error("{field} cannot exceed {max} characters.")]
    TooLong { field: Field, max: usize },
    #[error("The date must be today or later.")]
    PastDate,
}

/// One error per field, ordered by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    /// The displayable message for `field`, if it has an error.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: Field) -> Option<ValidationError> {
        self.0.remove(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    /// Field name to message, the shape a view binds to.
    pub fn to_messages(&self) -> BTreeMap<&'static str, String> {
        self.iter()
            .map(|(field, error)| (field.name(), error.to_string()))
            .collect()
    }
}

struct TextRule {
    field: Field,
    max_len: usize,
    value: fn(&NewTask) -> &str,
}

fn title(task: &NewTask) -> &str {
    &task.title
}

fn description(task: &NewTask) -> &str {
    &task.description
}

const TEXT_RULES: [TextRule; 2] = [
    TextRule {
        field: Field::Title,
        max_len: TITLE_MAX_LEN,
        value: title,
    },
    TextRule {
        field: Field::Description,
        max_len: DESCRIPTION_MAX_LEN,
        value: description,
    },
];

fn check_text(rule: &TextRule, task: &NewTask) -> Option<ValidationError> {
    let len = (rule.value)(task).chars().count();
    if len == 0 {
        Some(ValidationError::EmptyField(rule.field))
    } else if len > rule.max_len {
        Some(ValidationError::TooLong {
            field: rule.field,
            max: rule.max_len,
        })
    } else {
        None
    }
}

/// Checks every field against `today`, collecting all failures.
pub fn validate(task: NewTask, today: NaiveDate) -> Result<ValidTask, FieldErrors> {
    let mut errors = FieldErrors::new();

    for rule in &TEXT_RULES {
        if let Some(error) = check_text(rule, &task) {
            errors.insert(rule.field, error);
        }
    }

    if task.date < today {
        errors.insert(Field::Date, ValidationError::PastDate);
    }

    if errors.is_empty() {
        Ok(ValidTask::new(task))
    } else {
        Err(errors)
    }
}
