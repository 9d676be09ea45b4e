//! Single-step engineer ticket form.

use crate::{
    domain::{
        fields::{TICKET_DESCRIPTION, TICKET_FORM, TICKET_PRIORITY, TICKET_TITLE},
        interaction::Interaction,
        step::{Directive, FormView, StepResult},
    },
    flow::{
        SUBMIT_TICKET,
        extract::{extract, non_empty_text},
        markup::escape_markup,
    },
};

pub const MISSING_TICKET_FIELDS: &str = "Please fill all required fields.";

pub fn show_ticket_form(_interaction: &Interaction) -> StepResult {
    StepResult::ShowForm(FormView {
        header: "🧾 Open Engineer Ticket",
        fields: TICKET_FORM,
        submit_action: SUBMIT_TICKET,
        submit_label: "Submit Ticket",
    })
}

pub fn submit_ticket(interaction: &Interaction) -> StepResult {
    let title = extract(interaction, TICKET_TITLE);
    let description = extract(interaction, TICKET_DESCRIPTION);
    let priority = extract(interaction, TICKET_PRIORITY);

    let (Some(title), Some(description), Some(priority)) = (
        non_empty_text(&title),
        non_empty_text(&description),
        non_empty_text(&priority),
    ) else {
        return StepResult::validation_failed(MISSING_TICKET_FIELDS);
    };

    let message = [
        "✅ Ticket Submitted".to_owned(),
        format!("📌 Title: {title}"),
        format!("📝 Description: {description}"),
        format!("⚙️ Priority: {priority}"),
    ]
    .join("\n");
    let body = [
        "✅ <b>Ticket Submitted</b>".to_owned(),
        format!("📌 <b>Title:</b> {}", escape_markup(title)),
        format!("📝 <b>Description:</b> {}", escape_markup(description)),
        format!("⚙️ <b>Priority:</b> {}", escape_markup(priority)),
    ]
    .join("<br>");

    StepResult::Completed {
        message,
        directive: Directive::Announce {
            title: "🎟️ Ticket Summary",
            body,
        },
    }
}
