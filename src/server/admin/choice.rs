/// A selectable `(identifier, label)` option of a choice field.
///
/// `value: None` is the explicit unselected sentinel, always the first
/// option of a successfully built choice list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Choice {
    pub value: Option<i32>,
    pub label: String,
}

impl Choice {
    pub fn new(id: i32, label: String) -> Self {
        Self {
            value: Some(id),
            label,
        }
    }

    /// The "none selected" placeholder for a related entity.
    pub fn unselected(display_name: &str) -> Self {
        Self {
            value: None,
            label: format!("Select {display_name}..."),
        }
    }
}

/// A field of a synthesized admin form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormField {
    /// Plain value field bound to a scalar column.
    Text { name: String },
    /// Single-choice field injected for a relationship. An empty choice
    /// list marks a field whose option load failed; the form stays
    /// renderable but nothing is selectable.
    Select { name: String, choices: Vec<Choice> },
}

impl FormField {
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name } => name,
            Self::Select { name, .. } => name,
        }
    }
}
