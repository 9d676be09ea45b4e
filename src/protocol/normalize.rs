use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use crate::domain::interaction::{DateInput, FormInput, Interaction, InteractionKind, Parameter};

use super::{
    DIALOG_SUBMIT_EVENT, MESSAGE_EVENT,
    events::{ChatEvent, RawDateInput, RawFormInput},
};

/// Maps any inbound payload to one canonical [`Interaction`].
///
/// A payload that is not a JSON object is reported as unrecognized instead
/// of failing the request. Inside an object, a wrongly typed field only loses
/// that field.
pub fn normalize(payload: Value) -> Interaction {
    if !payload.is_object() {
        debug!("chat event payload is not an object");
        return Interaction::unrecognized();
    }

    match serde_json::from_value::<ChatEvent>(payload) {
        Ok(event) => normalize_event(event),
        Err(error) => {
            debug!("payload matches no chat event schema: {error}");
            Interaction::unrecognized()
        }
    }
}

/// Probes run in priority order. The add-on envelope nests fields that the
/// legacy probes would otherwise pick up, so the slash command descriptor is
/// checked before any invoked function.
pub fn normalize_event(event: ChatEvent) -> Interaction {
    let kind = if let Some(command_id) = slash_command_id(&event) {
        InteractionKind::SlashCommand { command_id }
    } else if let Some(action_name) = invoked_function(&event) {
        if dialog_event_type(&event) == Some(DIALOG_SUBMIT_EVENT) {
            InteractionKind::DialogSubmit { action_name }
        } else {
            InteractionKind::CardAction { action_name }
        }
    } else {
        InteractionKind::Unrecognized {
            plain_message: is_plain_message(&event),
        }
    };

    Interaction {
        kind,
        is_dialog_flow: is_dialog_flow(&event),
        actor_id: actor_id(&event),
        parameters: parameters(&event),
        form_inputs: form_inputs(event),
    }
}

fn slash_command_id(event: &ChatEvent) -> Option<i64> {
    let add_on = event
        .chat
        .as_ref()
        .and_then(|chat| chat.app_command_payload.as_ref())
        .and_then(|payload| payload.app_command_metadata.as_ref())
        .and_then(|metadata| metadata.app_command_id.as_ref());
    let legacy = event
        .message
        .as_ref()
        .and_then(|message| message.slash_command.as_ref())
        .and_then(|command| command.command_id.as_ref());

    add_on.and_then(parse_integer).or_else(|| legacy.and_then(parse_integer))
}

fn invoked_function(event: &ChatEvent) -> Option<String> {
    [
        event
            .common_event_object
            .as_ref()
            .and_then(|common| common.invoked_function.as_deref()),
        event
            .common
            .as_ref()
            .and_then(|common| common.invoked_function.as_deref()),
        event
            .action
            .as_ref()
            .and_then(|action| action.action_method_name.as_deref()),
    ]
    .into_iter()
    .flatten()
    .find_map(clean_function_name)
}

fn clean_function_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let name = trimmed.strip_suffix("()").unwrap_or(trimmed).trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_owned())
    }
}

fn dialog_event_type(event: &ChatEvent) -> Option<&str> {
    let chat = event.chat.as_ref();
    event
        .dialog_event_type
        .as_deref()
        .or_else(|| {
            chat.and_then(|chat| chat.app_command_payload.as_ref())
                .and_then(|payload| payload.dialog_event_type.as_deref())
        })
        .or_else(|| {
            chat.and_then(|chat| chat.button_clicked_payload.as_ref())
                .and_then(|payload| payload.dialog_event_type.as_deref())
        })
}

fn is_dialog_flow(event: &ChatEvent) -> bool {
    let chat = event.chat.as_ref();
    let flags = [
        event.is_dialog_event,
        chat.and_then(|chat| chat.app_command_payload.as_ref())
            .and_then(|payload| payload.is_dialog_event),
        chat.and_then(|chat| chat.button_clicked_payload.as_ref())
            .and_then(|payload| payload.is_dialog_event),
    ];

    flags.into_iter().flatten().any(|flag| flag) || dialog_event_type(event).is_some()
}

fn is_plain_message(event: &ChatEvent) -> bool {
    event.event_type.as_deref() == Some(MESSAGE_EVENT)
        || event
            .chat
            .as_ref()
            .is_some_and(|chat| chat.message_payload.is_some())
}

fn actor_id(event: &ChatEvent) -> Option<String> {
    event
        .user
        .as_ref()
        .and_then(|user| user.name.clone())
        .or_else(|| {
            event
                .chat
                .as_ref()
                .and_then(|chat| chat.user.as_ref())
                .and_then(|user| user.name.clone())
        })
        .filter(|name| !name.trim().is_empty())
}

/// List parameters from a legacy action come first, then map entries from
/// either common object. Duplicates are kept.
fn parameters(event: &ChatEvent) -> Vec<Parameter> {
    let mut parameters: Vec<Parameter> = event
        .action
        .iter()
        .flat_map(|action| action.parameters.iter().flatten())
        .filter_map(|parameter| {
            let key = parameter.key.as_deref()?.trim();
            if key.is_empty() {
                return None;
            }
            Some(Parameter::new(
                key,
                parameter.value.clone().unwrap_or_default(),
            ))
        })
        .collect();

    let maps = [event.common_event_object.as_ref(), event.common.as_ref()]
        .into_iter()
        .flatten()
        .filter_map(|common| common.parameters.as_ref());
    for map in maps {
        for (key, value) in map {
            if let Some(value) = parameter_text(value) {
                parameters.push(Parameter::new(key.as_str(), value));
            }
        }
    }

    parameters
}

fn parameter_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(_) | Value::Number(_) => Some(value.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// The add-on location wins over the legacy ones when a widget name appears
/// in more than one place.
fn form_inputs(event: ChatEvent) -> BTreeMap<String, FormInput> {
    let sources = [
        event.common_event_object.and_then(|common| common.form_inputs),
        event.common.and_then(|common| common.form_inputs),
        event.action.and_then(|action| action.form_inputs),
    ];

    let mut inputs = BTreeMap::new();
    for (name, raw) in sources.into_iter().flatten().flatten() {
        if inputs.contains_key(&name) {
            continue;
        }
        if let Some(input) = convert_form_input(raw) {
            inputs.insert(name, input);
        }
    }
    inputs
}

fn convert_form_input(raw: RawFormInput) -> Option<FormInput> {
    if let Some(values) = raw.string_inputs.and_then(|inputs| inputs.value) {
        return Some(FormInput::Strings(values));
    }
    if let Some(date) = raw
        .date_input
        .or(raw.date_time_input)
        .and_then(|RawDateInput { ms_since_epoch }| ms_since_epoch)
    {
        return Some(FormInput::Date(parse_date(date)));
    }
    raw.selection_input
        .and_then(|inputs| inputs.value)
        .map(FormInput::Selection)
}

fn parse_date(value: Value) -> DateInput {
    match parse_integer(&value) {
        Some(millis) => DateInput::Millis(millis),
        None => match value {
            Value::String(text) => DateInput::Malformed(text),
            other => DateInput::Malformed(other.to_string()),
        },
    }
}

fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
