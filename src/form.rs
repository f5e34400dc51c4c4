use crate::date::resolve_date_in_year;
use crate::store::TaskStore;
use crate::task::{Field, NewTask, TaskDraft, TaskId};
use crate::validation::{validate, FieldErrors, ValidationError};
use chrono::{Datelike, NaiveDate};

/// State behind the "new task" dialog.
#[derive(Debug, Default)]
pub struct TaskForm {
    draft: TaskDraft,
    errors: FieldErrors,
    focus: usize,
}

impl TaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn focused(&self) -> Field {
        Field::INPUTS[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Field::INPUTS.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + Field::INPUTS.len() - 1) % Field::INPUTS.len();
    }

    /// Replaces the text of `field` and drops its error.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if let Some(text) = self.draft.get_mut(field) {
            *text = value.into();
            self.errors.remove(field);
        }
    }

    pub fn push_char(&mut self, c: char) {
        let field = self.focused();
        let mut value = self.draft.get(field).to_string();
        value.push(c);
        self.set_field(field, value);
    }

    pub fn pop_char(&mut self) {
        let field = self.focused();
        let mut value = self.draft.get(field).to_string();
        value.pop();
        self.set_field(field, value);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Resolves, validates and stores the draft.
    ///
    /// Returns the new task's id, or `None` when the draft was rejected and
    /// `errors()` says why. The store is only touched on success, after which
    /// the form is reset.
    pub fn submit<S: TaskStore>(&mut self, store: &mut S, today: NaiveDate) -> Option<TaskId> {
        let Some(date) = resolve_date_in_year(&self.draft.day, &self.draft.month, today.year())
        else {
            tracing::debug!(day = %self.draft.day, month = %self.draft.month, "day or month rejected");
            self.errors.insert(Field::Day, ValidationError::InvalidDayOrMonth);
            self.errors.insert(Field::Month, ValidationError::InvalidDayOrMonth);
            return None;
        };

        let candidate = NewTask {
            title: self.draft.title.clone(),
            description: self.draft.description.clone(),
            date,
        };

        match validate(candidate, today) {
            Ok(valid) => {
                let id = store.add(valid).id;
                self.reset();
                Some(id)
            }
            Err(errors) => {
                tracing::debug!(count = errors.len(), errors = ?errors.to_messages(), "task rejected");
                self.errors = errors;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TaskList;
    use assert_matches::assert_matches;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn filled(title: &str, description: &str, day: &str, month: &str) -> TaskForm {
        let mut form = TaskForm::new();
        form.set_field(Field::Title, title);
        form.set_field(Field::Description, description);
        form.set_field(Field::Day, day);
        form.set_field(Field::Month, month);
        form
    }

    #[test]
    fn valid_draft_is_stored_and_form_reset() {
        let mut store = TaskList::new();
        let mut form = filled("Comprar pan", "Leche y huevos", "20", "04");

        let id = form.submit(&mut store, today());

        assert_matches!(id, Some(_));
        assert_eq!(store.tasks().len(), 1);
        let task = &store.tasks()[0];
        assert_eq!(Some(task.id), id);
        assert_eq!(task.title, "Comprar pan");
        assert_eq!(task.description, "Leche y huevos");
        assert_eq!(task.date, NaiveDate::from_ymd_opt(2025, 4, 20).unwrap());
        assert_eq!(form.draft(), &TaskDraft::default());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn impossible_date_marks_day_and_month_only() {
        let mut store = TaskList::new();
        let mut form = filled("", "", "31", "02");

        assert_eq!(form.submit(&mut store, today()), None);

        assert!(store.tasks().is_empty());
        assert_eq!(
            form.errors().message(Field::Day).as_deref(),
            Some("Day or month invalid")
        );
        assert_eq!(
            form.errors().get(Field::Month),
            Some(&ValidationError::InvalidDayOrMonth)
        );
        assert_eq!(form.errors().get(Field::Title), None);
        assert_eq!(form.errors().get(Field::Date), None);
    }

    #[test]
    fn date_rejection_keeps_earlier_messages() {
        let mut store = TaskList::new();
        let mut form = filled("", "desc", "20", "04");
        form.submit(&mut store, today());
        assert!(form.errors().get(Field::Title).is_some());

        form.set_field(Field::Day, "x");
        form.submit(&mut store, today());

        assert!(form.errors().get(Field::Title).is_some());
        assert!(form.errors().get(Field::Day).is_some());
    }

    #[test]
    fn validation_failure_replaces_previous_messages() {
        let mut store = TaskList::new();
        let mut form = filled("", "desc", "x", "04");
        form.submit(&mut store, today());
        assert!(form.errors().get(Field::Day).is_some());

        form.set_field(Field::Day, "20");
        form.set_field(Field::Title, "ok");
        form.set_field(Field::Description, "");
        form.submit(&mut store, today());

        assert_eq!(form.errors().len(), 1);
        assert_eq!(
            form.errors().get(Field::Description),
            Some(&ValidationError::EmptyField(Field::Description))
        );
    }

    #[test]
    fn empty_title_is_reported_alone() {
        let mut store = TaskList::new();
        let mut form = filled("", "Leche y huevos", "20", "04");

        assert_eq!(form.submit(&mut store, today()), None);
        assert_eq!(form.errors().len(), 1);
        assert_eq!(
            form.errors().get(Field::Title),
            Some(&ValidationError::EmptyField(Field::Title))
        );
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn yesterday_reports_past_date_only() {
        let mut store = TaskList::new();
        let mut form = filled("Comprar pan", "Leche y huevos", "9", "3");

        assert_eq!(form.submit(&mut store, today()), None);
        assert_eq!(form.errors().len(), 1);
        assert_eq!(form.errors().get(Field::Date), Some(&ValidationError::PastDate));
    }

    #[test]
    fn today_is_accepted() {
        let mut store = TaskList::new();
        let mut form = filled("Comprar pan", "Leche y huevos", "10", "3");

        assert_matches!(form.submit(&mut store, today()), Some(_));
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut store = TaskList::new();
        let mut form = filled("", "", "20", "04");
        form.submit(&mut store, today());
        assert_eq!(form.errors().len(), 2);

        form.set_field(Field::Title, "T");

        assert_eq!(form.errors().get(Field::Title), None);
        assert!(form.errors().get(Field::Description).is_some());
    }

    #[test]
    fn typing_edits_the_focused_field() {
        let mut form = TaskForm::new();
        assert_eq!(form.focused(), Field::Title);
        form.push_char('h');
        form.push_char('i');
        form.focus_next();
        form.focus_next();
        form.push_char('7');
        form.push_char('8');
        form.pop_char();

        assert_eq!(form.draft().title, "hi");
        assert_eq!(form.draft().day, "7");
    }

    #[test]
    fn focus_wraps_around() {
        let mut form = TaskForm::new();
        form.focus_prev();
        assert_eq!(form.focused(), Field::Month);
        form.focus_next();
        assert_eq!(form.focused(), Field::Title);
    }
}
