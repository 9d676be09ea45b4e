use crate::domain::{
    fields::FieldSpec,
    interaction::{Parameter, WidgetValue},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    /// The explicit help command: lists the available commands.
    Commands,
    /// Shown for plain messages and events nobody recognizes.
    DefaultPrompt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub header: &'static str,
    pub fields: &'static [FieldSpec],
    pub submit_action: &'static str,
    pub submit_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub field: &'static FieldSpec,
    pub value: WidgetValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationView {
    pub summary: Vec<SummaryLine>,
    pub submit_action: &'static str,
    pub back_action: &'static str,
    /// Values the submit button echoes back as parameters.
    pub prior_values: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Post a new card with this title. `body` is the card markup; the
    /// step's message stays plain text.
    Announce { title: &'static str, body: String },
    /// Close whatever is open and go back to the conversation.
    ReturnToRoot,
}

/// Outcome of a step handler, before it is turned into response JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResult {
    ShowHelp(HelpTopic),
    ShowForm(FormView),
    ShowConfirmation(ConfirmationView),
    ValidationFailed(String),
    Completed { message: String, directive: Directive },
}

impl StepResult {
    #[must_use]
    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::ValidationFailed(message.into())
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::ShowHelp(_) => "show_help",
            Self::ShowForm(_) => "show_form",
            Self::ShowConfirmation(_) => "show_confirmation",
            Self::ValidationFailed(_) => "validation_failed",
            Self::Completed { .. } => "completed",
        }
    }
}
