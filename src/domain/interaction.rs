use std::collections::BTreeMap;

/// What the user did, together with the identifier that selects a handler.
///
/// The command id and the action name live inside the variants, so an
/// interaction can never carry both, and `Unrecognized` carries neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionKind {
    SlashCommand { command_id: i64 },
    CardAction { action_name: String },
    DialogSubmit { action_name: String },
    /// `plain_message` is set when the event was an ordinary message with no
    /// command attached.
    Unrecognized { plain_message: bool },
}

impl InteractionKind {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::SlashCommand { .. } => "slash_command",
            Self::CardAction { .. } => "card_action",
            Self::DialogSubmit { .. } => "dialog_submit",
            Self::Unrecognized { .. } => "unrecognized",
        }
    }

    #[must_use]
    pub fn command_id(&self) -> Option<i64> {
        match self {
            Self::SlashCommand { command_id } => Some(*command_id),
            _ => None,
        }
    }

    #[must_use]
    pub fn action_name(&self) -> Option<&str> {
        match self {
            Self::CardAction { action_name } | Self::DialogSubmit { action_name } => {
                Some(action_name.as_str())
            }
            _ => None,
        }
    }
}

/// A submitted widget as the client sent it. Only one tag is kept per widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormInput {
    Strings(Vec<String>),
    Date(DateInput),
    Selection(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    Millis(i64),
    /// Raw text that did not parse as epoch milliseconds.
    Malformed(String),
}

/// A single value read out of a form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetValue {
    Text(String),
    Selection(String),
    DateMillis(i64),
    MalformedDate(String),
    Absent,
}

impl WidgetValue {
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Text or selection content, `None` for dates and absence.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) | Self::Selection(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// The value in the string form used for echoed button parameters.
    #[must_use]
    pub fn to_parameter_value(&self) -> Option<String> {
        match self {
            Self::Text(value) | Self::Selection(value) | Self::MalformedDate(value) => {
                Some(value.clone())
            }
            Self::DateMillis(millis) => Some(millis.to_string()),
            Self::Absent => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub key: String,
    pub value: String,
}

impl Parameter {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One inbound chat event in canonical form. Built per request and dropped
/// once the response is written.
///
/// `parameters` holds whatever the client echoed back from a previous
/// button and is untrusted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub kind: InteractionKind,
    pub form_inputs: BTreeMap<String, FormInput>,
    pub parameters: Vec<Parameter>,
    pub is_dialog_flow: bool,
    pub actor_id: Option<String>,
}

impl Interaction {
    #[must_use]
    pub fn new(kind: InteractionKind) -> Self {
        Self {
            kind,
            form_inputs: BTreeMap::new(),
            parameters: Vec::new(),
            is_dialog_flow: false,
            actor_id: None,
        }
    }

    #[must_use]
    pub fn unrecognized() -> Self {
        Self::new(InteractionKind::Unrecognized {
            plain_message: false,
        })
    }

    #[must_use]
    pub fn with_form_input(mut self, name: impl Into<String>, input: FormInput) -> Self {
        self.form_inputs.insert(name.into(), input);
        self
    }

    #[must_use]
    pub fn with_text(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_form_input(name, FormInput::Strings(vec![value.into()]))
    }

    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push(Parameter::new(key, value));
        self
    }

    #[must_use]
    pub fn in_dialog(mut self, is_dialog_flow: bool) -> Self {
        self.is_dialog_flow = is_dialog_flow;
        self
    }

    #[must_use]
    pub fn with_actor(mut self, actor_id: impl Into<String>) -> Self {
        self.actor_id = Some(actor_id.into());
        self
    }
}
