use crate::{
    domain::{
        interaction::{Interaction, InteractionKind},
        step::{Directive, StepResult},
    },
    flow::{
        ADD_CONTACT_COMMAND_ID, CLOSE_CARD, HELP_COMMAND_ID, OPEN_CONFIRMATION,
        OPEN_INITIAL_DIALOG, OPEN_TICKET_COMMAND_ID, SUBMIT_FORM, SUBMIT_TICKET, contact, help,
        ticket,
    },
};

pub type StepHandler = fn(&Interaction) -> StepResult;

#[derive(Clone, Copy)]
struct CommandRoute {
    command_id: i64,
    handler: StepHandler,
}

#[derive(Clone, Copy)]
struct ActionRoute {
    action_name: &'static str,
    handler: StepHandler,
}

const COMMAND_ROUTES: &[CommandRoute] = &[
    CommandRoute {
        command_id: HELP_COMMAND_ID,
        handler: help::show_help,
    },
    CommandRoute {
        command_id: ADD_CONTACT_COMMAND_ID,
        handler: contact::show_form,
    },
    CommandRoute {
        command_id: OPEN_TICKET_COMMAND_ID,
        handler: ticket::show_ticket_form,
    },
];

const ACTION_ROUTES: &[ActionRoute] = &[
    ActionRoute {
        action_name: OPEN_INITIAL_DIALOG,
        handler: contact::show_form,
    },
    ActionRoute {
        action_name: OPEN_CONFIRMATION,
        handler: contact::show_confirmation,
    },
    ActionRoute {
        action_name: SUBMIT_FORM,
        handler: contact::submit,
    },
    ActionRoute {
        action_name: CLOSE_CARD,
        handler: close_card,
    },
    ActionRoute {
        action_name: SUBMIT_TICKET,
        handler: ticket::submit_ticket,
    },
];

/// Picks the step handler for an interaction and runs it.
///
/// Card clicks and dialog submits share one table. Unknown identifiers come
/// back as a validation failure naming the identifier.
pub fn route(interaction: &Interaction) -> StepResult {
    match &interaction.kind {
        InteractionKind::SlashCommand { command_id } => match command_route_for(*command_id) {
            Some(route) => (route.handler)(interaction),
            None => StepResult::validation_failed(format!("Unknown command ID: {command_id}")),
        },
        InteractionKind::CardAction { action_name }
        | InteractionKind::DialogSubmit { action_name } => {
            match action_route_for(action_name) {
                Some(route) => (route.handler)(interaction),
                None => StepResult::validation_failed(format!("Unknown action: {action_name}")),
            }
        }
        InteractionKind::Unrecognized { .. } => help::show_default_prompt(interaction),
    }
}

#[must_use]
pub fn known_commands() -> Vec<i64> {
    COMMAND_ROUTES.iter().map(|route| route.command_id).collect()
}

#[must_use]
pub fn known_actions() -> Vec<&'static str> {
    ACTION_ROUTES.iter().map(|route| route.action_name).collect()
}

fn command_route_for(command_id: i64) -> Option<&'static CommandRoute> {
    COMMAND_ROUTES
        .iter()
        .find(|route| route.command_id == command_id)
}

fn action_route_for(action_name: &str) -> Option<&'static ActionRoute> {
    ACTION_ROUTES
        .iter()
        .find(|route| route.action_name == action_name)
}

fn close_card(_interaction: &Interaction) -> StepResult {
    StepResult::Completed {
        message: String::new(),
        directive: Directive::ReturnToRoot,
    }
}
