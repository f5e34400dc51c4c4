use crate::task::{Task, TaskId, ValidTask};

/// Where accepted tasks go. The store owns id assignment.
pub trait TaskStore {
    fn add(&mut self, task: ValidTask) -> &Task;
    fn tasks(&self) -> &[Task];
}

/// Append-only, in-memory list of tasks for the lifetime of the process.
#[derive(Debug)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl TaskList {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore for TaskList {
    fn add(&mut self, task: ValidTask) -> &Task {
        let id = self.next_id;
        self.next_id += 1;

        let task = Task::from_valid(id, task);
        tracing::info!(id, title = %task.title, date = %task.date, "task added");
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::NewTask;
    use crate::validation::validate;
    use chrono::NaiveDate;

    fn valid_task(title: &str) -> ValidTask {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        validate(
            NewTask {
                title: title.to_string(),
                description: "something".to_string(),
                date: today,
            },
            today,
        )
        .unwrap()
    }

    #[test]
    fn starts_empty() {
        assert!(TaskList::new().tasks().is_empty());
    }

    #[test]
    fn assigns_unique_increasing_ids() {
        let mut list = TaskList::new();
        let first = list.add(valid_task("one")).id;
        let second = list.add(valid_task("two")).id;
        let third = list.add(valid_task("three")).id;

        assert!(first < second && second < third);
    }

    #[test]
    fn keeps_insertion_order() {
        let mut list = TaskList::new();
        list.add(valid_task("one"));
        list.add(valid_task("two"));

        let titles: Vec<&str> = list.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["one", "two"]);
    }
}
