//! Turns a [`StepResult`] into the chat response JSON.
//!
//! Dialog flows get `DIALOG` action responses; everything else is a message
//! that is either posted, updated in place, or shown privately to the actor.

use chrono::DateTime;
use serde_json::{Value, json};

use crate::{
    domain::{
        error::DomainError,
        fields::{FieldSpec, WidgetKind},
        interaction::{Interaction, Parameter, WidgetValue},
        step::{ConfirmationView, Directive, FormView, HelpTopic, StepResult},
    },
    flow::{OPEN_INITIAL_DIALOG, markup::escape_markup},
};

const APP_TITLE: &str = "Contact Manager";
const CARD_CLOSED: &str = "Card closed.";
const NOT_PROVIDED: &str = "Not provided";

pub fn render(result: &StepResult, interaction: &Interaction) -> Result<Value, DomainError> {
    match result {
        StepResult::ShowHelp(topic) => Ok(help_message(*topic)),
        StepResult::ShowForm(view) => Ok(form_dialog(view)),
        StepResult::ShowConfirmation(view) => confirmation(view, interaction.is_dialog_flow),
        StepResult::ValidationFailed(message) => Ok(validation_failure(message, interaction)),
        StepResult::Completed { message, directive } => Ok(completion(
            message,
            directive,
            interaction.is_dialog_flow,
        )),
    }
}

fn help_message(topic: HelpTopic) -> Value {
    let (text, card_id, intro) = match topic {
        HelpTopic::Commands => (
            "📇 Manage your contacts. Use `/addContact` to add one.",
            "contactManagerCard",
            "<b>Welcome to Contact Manager!</b><br>Manage your contacts easily.<br>\
             <b>/addContact</b>: add a new contact.<br>\
             <b>/openTicket</b>: open an engineer support ticket.",
        ),
        HelpTopic::DefaultPrompt => (
            "To add a contact, try `/addContact`",
            "defaultCard",
            "Use <b>/addContact</b> or click below:",
        ),
    };

    let add_contact = json!({
        "text": "Add Contact",
        "onClick": {
            "action": {
                "function": OPEN_INITIAL_DIALOG,
                "interaction": "OPEN_DIALOG",
            }
        }
    });

    json!({
        "text": text,
        "cardsV2": [{
            "cardId": card_id,
            "card": {
                "header": { "title": APP_TITLE },
                "sections": [{
                    "widgets": [
                        { "textParagraph": { "text": intro } },
                        { "buttonList": { "buttons": [add_contact] } },
                    ]
                }]
            }
        }]
    })
}

fn form_dialog(view: &FormView) -> Value {
    let mut widgets: Vec<Value> = view.fields.iter().map(field_widget).collect();
    widgets.push(json!({
        "buttonList": {
            "buttons": [button(view.submit_label, view.submit_action, &[])]
        }
    }));

    dialog(json!({
        "dialog": {
            "body": {
                "sections": [{ "header": view.header, "widgets": widgets }]
            }
        }
    }))
}

fn field_widget(field: &FieldSpec) -> Value {
    match field.kind {
        WidgetKind::SingleLineText | WidgetKind::MultiLineText => {
            let input_type = if field.kind == WidgetKind::SingleLineText {
                "SINGLE_LINE"
            } else {
                "MULTIPLE_LINE"
            };
            json!({
                "textInput": {
                    "name": field.name,
                    "label": field.label,
                    "type": input_type,
                }
            })
        }
        WidgetKind::DateOnly => json!({
            "dateTimePicker": {
                "name": field.name,
                "label": field.label,
                "type": "DATE_ONLY",
            }
        }),
        WidgetKind::RadioButtons(choices) => {
            let items: Vec<Value> = choices
                .iter()
                .map(|choice| {
                    json!({
                        "text": choice.text,
                        "value": choice.value,
                        "selected": choice.selected,
                    })
                })
                .collect();
            json!({
                "selectionInput": {
                    "name": field.name,
                    "label": field.label,
                    "type": "RADIO_BUTTON",
                    "items": items,
                }
            })
        }
    }
}

fn confirmation(view: &ConfirmationView, is_dialog_flow: bool) -> Result<Value, DomainError> {
    let mut widgets = Vec::with_capacity(view.summary.len() + 1);
    for line in &view.summary {
        let value = escape_markup(&display_value(&line.value)?);
        widgets.push(json!({
            "decoratedText": {
                "topLabel": line.field.label,
                "text": value,
                "wrapText": true,
            }
        }));
    }
    widgets.push(json!({
        "buttonList": {
            "buttons": [
                button("Back", view.back_action, &[]),
                button("Submit", view.submit_action, &view.prior_values),
            ]
        }
    }));

    if is_dialog_flow {
        return Ok(dialog(json!({
            "dialog": {
                "body": {
                    "sections": [{ "header": "Confirm contact", "widgets": widgets }]
                }
            }
        })));
    }

    Ok(json!({
        "actionResponse": { "type": "UPDATE_MESSAGE" },
        "text": "✅ Confirm contact",
        "cardsV2": [{
            "cardId": "confirmationCard",
            "card": {
                "header": { "title": "Confirm contact" },
                "sections": [{ "widgets": widgets }]
            }
        }]
    }))
}

fn display_value(value: &WidgetValue) -> Result<String, DomainError> {
    match value {
        WidgetValue::Text(text) | WidgetValue::Selection(text) => Ok(text.clone()),
        WidgetValue::DateMillis(millis) => format_date(*millis),
        WidgetValue::MalformedDate(raw) => Err(DomainError::MalformedDate(raw.clone())),
        WidgetValue::Absent => Ok(NOT_PROVIDED.to_owned()),
    }
}

fn format_date(millis: i64) -> Result<String, DomainError> {
    DateTime::from_timestamp_millis(millis)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .ok_or_else(|| DomainError::MalformedDate(format!("{millis} is out of range")))
}

fn validation_failure(message: &str, interaction: &Interaction) -> Value {
    if interaction.is_dialog_flow {
        return dialog(json!({
            "actionStatus": {
                "statusCode": "INVALID_ARGUMENT",
                "userFacingMessage": message,
            }
        }));
    }

    let mut response = json!({
        "actionResponse": { "type": "NEW_MESSAGE" },
        "text": format!("❌ {message}"),
    });
    if let Some(actor_id) = &interaction.actor_id {
        response["privateMessageViewer"] = json!({ "name": actor_id });
    }
    response
}

fn completion(message: &str, directive: &Directive, is_dialog_flow: bool) -> Value {
    match directive {
        Directive::ReturnToRoot if is_dialog_flow => dialog(json!({
            "actionStatus": { "statusCode": "OK" }
        })),
        Directive::ReturnToRoot => {
            let text = if message.is_empty() { CARD_CLOSED } else { message };
            json!({
                "actionResponse": { "type": "UPDATE_MESSAGE" },
                "text": text,
            })
        }
        Directive::Announce { title, body } => json!({
            "actionResponse": { "type": "NEW_MESSAGE" },
            "text": message,
            "cardsV2": [{
                "cardId": "resultCard",
                "card": {
                    "header": { "title": title },
                    "sections": [{ "widgets": [{ "textParagraph": { "text": body } }] }]
                }
            }]
        }),
    }
}

fn dialog(dialog_action: Value) -> Value {
    json!({
        "actionResponse": {
            "type": "DIALOG",
            "dialogAction": dialog_action,
        }
    })
}

fn button(text: &str, function: &str, parameters: &[Parameter]) -> Value {
    let mut action = json!({ "function": function });
    if !parameters.is_empty() {
        action["parameters"] = parameters
            .iter()
            .map(|parameter| json!({ "key": parameter.key, "value": parameter.value }))
            .collect();
    }

    json!({
        "text": text,
        "onClick": { "action": action }
    })
}
