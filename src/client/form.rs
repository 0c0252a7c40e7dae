use uuid::Uuid;

use crate::events::{datetime, dto::EventBody, repo::Event};

/// Which repository operation a submission maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Editing(Uuid),
}

/// Modal form state for creating or editing one event.
///
/// Two effective modes: `Create` with all fields blank, and `Editing`
/// pre-populated from a selected event. Time fields hold the text of a
/// datetime-local input; parsing stays with the validator on submit.
#[derive(Debug, Clone)]
pub struct EventForm {
    pub mode: FormMode,
    pub title: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub reminder: bool,
    pub reminder_time: String,
}

impl Default for EventForm {
    fn default() -> Self {
        Self::new()
    }
}

impl EventForm {
    /// Blank create-mode form ("Add Event" with no selection).
    pub fn new() -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            description: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            reminder: false,
            reminder_time: String::new(),
        }
    }

    /// Edit-mode form pre-populated from a selected event.
    pub fn edit(event: &Event) -> Self {
        Self {
            mode: FormMode::Editing(event.id),
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            start_time: datetime::format_minutes(event.start_time).unwrap_or_default(),
            end_time: datetime::format_minutes(event.end_time).unwrap_or_default(),
            reminder: event.reminder,
            reminder_time: event
                .reminder_time
                .and_then(|t| datetime::format_minutes(t).ok())
                .unwrap_or_default(),
        }
    }

    /// Dismissing the modal, or reopening it with no selection, returns
    /// to a blank create form.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The event id to update, or `None` when submission should create.
    pub fn target(&self) -> Option<Uuid> {
        match self.mode {
            FormMode::Create => None,
            FormMode::Editing(id) => Some(id),
        }
    }

    /// Package the current field values in the shape the validator
    /// expects. Blank optional fields are omitted; the title is always
    /// sent so the validator owns the presence check.
    pub fn payload(&self) -> EventBody {
        EventBody {
            title: Some(self.title.clone()),
            description: (!self.description.trim().is_empty()).then(|| self.description.clone()),
            start_time: (!self.start_time.is_empty()).then(|| self.start_time.clone()),
            end_time: (!self.end_time.is_empty()).then(|| self.end_time.clone()),
            reminder: self.reminder.then_some(true),
            reminder_time: (!self.reminder_time.is_empty()).then(|| self.reminder_time.clone()),
        }
    }
}
