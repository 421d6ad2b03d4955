//! Notification events produced by the editor and the sinks that receive them.
//!
//! Every state transition returns the events it produced alongside its value
//! (see [`Applied`]); delivering them is left to a [`NotificationSink`].

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// A user-facing event description, typically rendered as a toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
        }
    }

    pub(crate) fn field_added(label: &str) -> Self {
        Self::new("Field added", format!("\"{}\" was added to the form.", label), Severity::Success)
    }

    pub(crate) fn field_duplicated(label: &str) -> Self {
        Self::new("Field duplicated", format!("A copy of \"{}\" was added.", label), Severity::Success)
    }

    pub(crate) fn field_deleted(label: &str) -> Self {
        Self::new("Field deleted", format!("\"{}\" was removed from the form.", label), Severity::Info)
    }

    pub(crate) fn form_loaded(name: &str) -> Self {
        Self::new("Form loaded", format!("Editing \"{}\".", name), Severity::Info)
    }

    pub(crate) fn template_applied(field_count: usize) -> Self {
        Self::new(
            "Template applied",
            format!("Started from a template with {} fields.", field_count),
            Severity::Success,
        )
    }

    pub(crate) fn new_form_started() -> Self {
        Self::new("New form", "Started a blank form.", Severity::Info)
    }

    pub(crate) fn form_saved(name: &str) -> Self {
        Self::new("Form saved", format!("\"{}\" was saved.", name), Severity::Success)
    }
}

/// The result of a state transition together with the notifications it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Applied<T = ()> {
    pub value: T,
    pub events: Vec<Notification>,
}

impl<T> Applied<T> {
    pub fn new(value: T, events: Vec<Notification>) -> Self {
        Self { value, events }
    }

    pub fn silent(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    pub fn with_event(value: T, event: Notification) -> Self {
        Self::new(value, vec![event])
    }
}

/// Receives notifications. Delivery is best-effort; the editor never depends on it.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

impl NotificationSink for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Writes notifications to the `tracing` subscriber at a level matching their severity.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&mut self, n: Notification) {
        match n.severity {
            Severity::Info | Severity::Success => info!(title = %n.title, "{}", n.description),
            Severity::Warning => warn!(title = %n.title, "{}", n.description),
            Severity::Error => error!(title = %n.title, "{}", n.description),
        }
    }
}
