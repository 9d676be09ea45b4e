use crate::domain::{
    interaction::Interaction,
    step::{HelpTopic, StepResult},
};

pub fn show_help(_interaction: &Interaction) -> StepResult {
    StepResult::ShowHelp(HelpTopic::Commands)
}

/// Fallback for plain messages and events that match no known shape.
pub fn show_default_prompt(_interaction: &Interaction) -> StepResult {
    StepResult::ShowHelp(HelpTopic::DefaultPrompt)
}
