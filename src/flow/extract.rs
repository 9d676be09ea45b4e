use crate::domain::interaction::{DateInput, FormInput, Interaction, WidgetValue};

/// Reads one widget's value from the interaction's form inputs.
///
/// List inputs yield their first element and an empty list counts as absent.
/// Dates come back as raw epoch milliseconds, so a zero date stays distinct
/// from a missing one.
#[must_use]
pub fn extract(interaction: &Interaction, widget_name: &str) -> WidgetValue {
    let Some(input) = interaction.form_inputs.get(widget_name) else {
        return WidgetValue::Absent;
    };

    match input {
        FormInput::Strings(values) => values
            .first()
            .map_or(WidgetValue::Absent, |value| WidgetValue::Text(value.clone())),
        FormInput::Date(DateInput::Millis(millis)) => WidgetValue::DateMillis(*millis),
        FormInput::Date(DateInput::Malformed(raw)) => WidgetValue::MalformedDate(raw.clone()),
        FormInput::Selection(values) => values
            .first()
            .map_or(WidgetValue::Absent, |value| {
                WidgetValue::Selection(value.clone())
            }),
    }
}

/// First echoed parameter with a matching key.
#[must_use]
pub fn extract_parameter<'a>(interaction: &'a Interaction, key: &str) -> Option<&'a str> {
    interaction
        .parameters
        .iter()
        .find(|parameter| parameter.key == key)
        .map(|parameter| parameter.value.as_str())
}

/// Text content of a widget with surrounding whitespace removed, `None` when
/// nothing usable was entered.
pub(crate) fn non_empty_text(value: &WidgetValue) -> Option<&str> {
    value
        .as_str()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
