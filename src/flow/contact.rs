//! The add-contact flow: form, confirmation, submit.
//!
//! Nothing is kept between steps. The confirmation step hands the entered
//! values to the client as button parameters and the submit step reads them
//! back, validating again because the client may send anything.

use crate::{
    domain::{
        fields::{CONTACT_BIRTHDATE, CONTACT_FORM, CONTACT_NAME, CONTACT_TYPE},
        interaction::{Interaction, Parameter, WidgetValue},
        step::{ConfirmationView, Directive, FormView, StepResult, SummaryLine},
    },
    flow::{
        OPEN_CONFIRMATION, OPEN_INITIAL_DIALOG, SUBMIT_FORM,
        extract::{extract, extract_parameter, non_empty_text},
        markup::escape_markup,
    },
};

pub const MISSING_NAME: &str = "Please enter a contact name";

/// Always starts blank, even when re-entered from the confirmation view.
pub fn show_form(_interaction: &Interaction) -> StepResult {
    StepResult::ShowForm(FormView {
        header: "Add new contact",
        fields: CONTACT_FORM,
        submit_action: OPEN_CONFIRMATION,
        submit_label: "Review and Submit",
    })
}

pub fn show_confirmation(interaction: &Interaction) -> StepResult {
    let name = extract(interaction, CONTACT_NAME);
    let Some(name) = non_empty_text(&name) else {
        return StepResult::validation_failed(MISSING_NAME);
    };

    let values = [
        WidgetValue::Text(name.to_owned()),
        extract(interaction, CONTACT_BIRTHDATE),
        extract(interaction, CONTACT_TYPE),
    ];
    let summary: Vec<SummaryLine> = CONTACT_FORM
        .iter()
        .zip(values)
        .map(|(field, value)| SummaryLine { field, value })
        .collect();
    let prior_values = summary
        .iter()
        .filter_map(|line| {
            line.value
                .to_parameter_value()
                .map(|value| Parameter::new(line.field.name, value))
        })
        .collect();

    StepResult::ShowConfirmation(ConfirmationView {
        summary,
        submit_action: SUBMIT_FORM,
        back_action: OPEN_INITIAL_DIALOG,
        prior_values,
    })
}

/// Reads the name from echoed parameters, not form inputs. A submit that did
/// not come from a confirmation view carries no parameters and fails here.
pub fn submit(interaction: &Interaction) -> StepResult {
    let name = extract_parameter(interaction, CONTACT_NAME).filter(|name| !name.trim().is_empty());

    match name {
        Some(name) => StepResult::Completed {
            message: format!("✅ {name} has been added to your contacts."),
            directive: Directive::Announce {
                title: "Success!",
                body: format!("✅ {} has been added to your contacts.", escape_markup(name)),
            },
        },
        None => StepResult::validation_failed(MISSING_NAME),
    }
}
