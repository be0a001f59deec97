//! Task screen form.
//!
//! Create and edit share this one draft. Edit pre-fills from the selected
//! task and remembers its identifier; create starts from the fixed default
//! (empty strings, zero reward, default category). Submission issues a
//! keyed merge when an identifier is present and an append otherwise.

use stipend_core::{Task, TaskCategory, TaskId};

/// Fields of the task form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskField {
    /// Task title.
    #[default]
    Title,
    /// Task description.
    Description,
    /// Target URL.
    Url,
    /// Reward amount.
    Reward,
    /// Category selector.
    Category,
}

impl TaskField {
    /// All fields in display order.
    pub fn all() -> &'static [TaskField] {
        &[
            TaskField::Title,
            TaskField::Description,
            TaskField::Url,
            TaskField::Reward,
            TaskField::Category,
        ]
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            TaskField::Title => "Title",
            TaskField::Description => "Description",
            TaskField::Url => "URL",
            TaskField::Reward => "Reward",
            TaskField::Category => "Category",
        }
    }

    /// Next field, wrapping.
    pub fn next(&self) -> TaskField {
        match self {
            TaskField::Title => TaskField::Description,
            TaskField::Description => TaskField::Url,
            TaskField::Url => TaskField::Reward,
            TaskField::Reward => TaskField::Category,
            TaskField::Category => TaskField::Title,
        }
    }

    /// Previous field, wrapping.
    pub fn prev(&self) -> TaskField {
        match self {
            TaskField::Title => TaskField::Category,
            TaskField::Description => TaskField::Title,
            TaskField::Url => TaskField::Description,
            TaskField::Reward => TaskField::Url,
            TaskField::Category => TaskField::Reward,
        }
    }
}

/// The shared create/edit draft behind the task modal.
#[derive(Debug, Clone)]
pub struct TaskForm {
    id: Option<TaskId>,
    /// Title buffer.
    pub title: String,
    /// Description buffer.
    pub description: String,
    /// URL buffer.
    pub url: String,
    /// Reward buffer; coerced to `f64` at submit time.
    pub reward_input: String,
    /// Selected category.
    pub category: TaskCategory,
    /// Field the cursor is on.
    pub selected: TaskField,
    submitting: bool,
}

impl TaskForm {
    /// Fresh create draft.
    pub fn create() -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            url: String::new(),
            reward_input: "0".to_string(),
            category: TaskCategory::default(),
            selected: TaskField::default(),
            submitting: false,
        }
    }

    /// Edit draft pre-filled from an existing task.
    pub fn edit(id: TaskId, task: &Task) -> Self {
        Self {
            id: Some(id),
            title: task.title.clone(),
            description: task.description.clone(),
            url: task.url.clone(),
            reward_input: format!("{}", task.reward),
            category: task.category,
            selected: TaskField::default(),
            submitting: false,
        }
    }

    /// The identifier when editing, `None` when creating.
    pub fn id(&self) -> Option<&TaskId> {
        self.id.as_ref()
    }

    /// Whether this draft edits an existing task.
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// The task document as currently drafted. Never carries an identifier
    /// field; the key travels separately.
    pub fn task(&self) -> Task {
        Task {
            title: self.title.clone(),
            description: self.description.clone(),
            url: self.url.clone(),
            reward: self.reward_input.trim().parse().unwrap_or(f64::NAN),
            category: self.category,
        }
    }

    /// Move the cursor to the next field.
    pub fn select_next(&mut self) {
        self.selected = self.selected.next();
    }

    /// Move the cursor to the previous field.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.prev();
    }

    /// Type into the selected field. The category selector ignores typed
    /// characters; it cycles instead.
    pub fn input_char(&mut self, c: char) {
        match self.selected {
            TaskField::Title => self.title.push(c),
            TaskField::Description => self.description.push(c),
            TaskField::Url => self.url.push(c),
            TaskField::Reward => self.reward_input.push(c),
            TaskField::Category => {}
        }
    }

    /// Delete from the selected field.
    pub fn backspace(&mut self) {
        match self.selected {
            TaskField::Title => {
                self.title.pop();
            }
            TaskField::Description => {
                self.description.pop();
            }
            TaskField::Url => {
                self.url.pop();
            }
            TaskField::Reward => {
                self.reward_input.pop();
            }
            TaskField::Category => {}
        }
    }

    /// Cycle the category when the cursor is on the selector.
    pub fn cycle_category(&mut self) {
        if self.selected == TaskField::Category {
            self.category = self.category.next();
        }
    }

    /// Current buffer of the selected field, for rendering the cursor.
    pub fn selected_value(&self) -> String {
        match self.selected {
            TaskField::Title => self.title.clone(),
            TaskField::Description => self.description.clone(),
            TaskField::Url => self.url.clone(),
            TaskField::Reward => self.reward_input.clone(),
            TaskField::Category => self.category.label().to_string(),
        }
    }

    /// Whether a submit is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Mark the submit as in flight.
    pub fn begin_submit(&mut self) {
        self.submitting = true;
    }

    /// The submit finished (either way); the modal decides what happens next.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_starts_from_the_fixed_default() {
        let form = TaskForm::create();
        assert!(!form.is_edit());
        assert!(form.title.is_empty());
        assert_eq!(form.category, TaskCategory::Telegram);
        assert_eq!(form.task().reward, 0.0);
    }

    #[test]
    fn edit_prefills_from_the_selected_task() {
        let task = Task {
            title: "Sub".into(),
            description: "Subscribe to the channel".into(),
            url: "https://youtube.com/@stipend".into(),
            reward: 5.0,
            category: TaskCategory::YouTube,
        };
        let form = TaskForm::edit(TaskId::new("t-1"), &task);
        assert!(form.is_edit());
        assert_eq!(form.id().unwrap().as_str(), "t-1");
        assert_eq!(form.reward_input, "5");
        assert_eq!(form.task(), task);
    }

    #[test]
    fn drafted_document_never_contains_an_identifier() {
        let form = TaskForm::edit(TaskId::new("t-1"), &Task::default());
        let value = serde_json::to_value(form.task()).unwrap();
        assert!(value.as_object().unwrap().get("id").is_none());
    }

    #[test]
    fn typing_edits_the_selected_field() {
        let mut form = TaskForm::create();
        form.input_char('S');
        form.input_char('u');
        form.input_char('b');
        assert_eq!(form.title, "Sub");

        form.selected = TaskField::Reward;
        form.backspace(); // clear the "0"
        form.input_char('5');
        assert_eq!(form.task().reward, 5.0);
    }

    #[test]
    fn unparsable_reward_coerces_to_nan() {
        let mut form = TaskForm::create();
        form.selected = TaskField::Reward;
        form.input_char('x');
        assert!(form.task().reward.is_nan());
    }

    #[test]
    fn category_cycles_only_on_the_selector() {
        let mut form = TaskForm::create();
        form.cycle_category();
        assert_eq!(form.category, TaskCategory::Telegram);

        form.selected = TaskField::Category;
        form.cycle_category();
        assert_eq!(form.category, TaskCategory::YouTube);
        // Typed characters are ignored on the selector.
        form.input_char('z');
        assert_eq!(form.selected_value(), "YouTube");
    }

    #[test]
    fn field_cycle_wraps_both_ways() {
        let mut field = TaskField::default();
        for _ in 0..TaskField::all().len() {
            field = field.next();
        }
        assert_eq!(field, TaskField::Title);
        assert_eq!(TaskField::Title.prev(), TaskField::Category);
    }
}
