//! Inbound chat event schemas.
//!
//! Two envelopes reach the webhook: the legacy Chat API event (top-level
//! `type`, `message`, `common`, `action`) and the add-on event
//! (`commonEventObject` plus a `chat` object). Both are read through one
//! struct where every field is optional, so a partial payload still parses.
//! Leaf fields are read leniently: a value of the wrong type reads as `None`
//! instead of failing the whole event.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatEvent {
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub event_type: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub message: Option<LegacyMessage>,
    #[serde(deserialize_with = "lenient")]
    pub user: Option<ChatUser>,
    #[serde(deserialize_with = "lenient")]
    pub common: Option<CommonEventObject>,
    #[serde(deserialize_with = "lenient")]
    pub action: Option<LegacyAction>,
    #[serde(deserialize_with = "lenient")]
    pub is_dialog_event: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub dialog_event_type: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub common_event_object: Option<CommonEventObject>,
    #[serde(deserialize_with = "lenient")]
    pub chat: Option<AddOnChat>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LegacyMessage {
    #[serde(deserialize_with = "lenient")]
    pub slash_command: Option<SlashCommandDescriptor>,
    #[serde(deserialize_with = "lenient")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlashCommandDescriptor {
    /// Number or numeric string, depending on the sender.
    pub command_id: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatUser {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommonEventObject {
    #[serde(deserialize_with = "lenient")]
    pub invoked_function: Option<String>,
    #[serde(deserialize_with = "lenient_map")]
    pub form_inputs: Option<BTreeMap<String, RawFormInput>>,
    #[serde(deserialize_with = "lenient")]
    pub parameters: Option<BTreeMap<String, Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LegacyAction {
    #[serde(deserialize_with = "lenient")]
    pub action_method_name: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub parameters: Option<Vec<ActionParameter>>,
    #[serde(deserialize_with = "lenient_map")]
    pub form_inputs: Option<BTreeMap<String, RawFormInput>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ActionParameter {
    #[serde(deserialize_with = "lenient")]
    pub key: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawFormInput {
    #[serde(deserialize_with = "lenient")]
    pub string_inputs: Option<StringInputs>,
    #[serde(deserialize_with = "lenient")]
    pub date_input: Option<RawDateInput>,
    #[serde(deserialize_with = "lenient")]
    pub date_time_input: Option<RawDateInput>,
    #[serde(deserialize_with = "lenient")]
    pub selection_input: Option<StringInputs>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StringInputs {
    #[serde(deserialize_with = "lenient_strings")]
    pub value: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawDateInput {
    pub ms_since_epoch: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AddOnChat {
    #[serde(deserialize_with = "lenient")]
    pub user: Option<ChatUser>,
    #[serde(deserialize_with = "lenient")]
    pub app_command_payload: Option<AppCommandPayload>,
    #[serde(deserialize_with = "lenient")]
    pub button_clicked_payload: Option<DialogMarkers>,
    pub message_payload: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppCommandPayload {
    #[serde(deserialize_with = "lenient")]
    pub app_command_metadata: Option<AppCommandMetadata>,
    #[serde(deserialize_with = "lenient")]
    pub is_dialog_event: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub dialog_event_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppCommandMetadata {
    pub app_command_id: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub app_command_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DialogMarkers {
    #[serde(deserialize_with = "lenient")]
    pub is_dialog_event: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub dialog_event_type: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_array().map(|items| {
        items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_owned))
            .collect()
    }))
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(None);
    };
    Ok(Some(
        items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
    ))
}

fn lenient_map<'de, D, T>(deserializer: D) -> Result<Option<BTreeMap<String, T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Object(entries) = value else {
        return Ok(None);
    };
    Ok(Some(
        entries
            .into_iter()
            .filter_map(|(key, item)| serde_json::from_value(item).ok().map(|item| (key, item)))
            .collect(),
    ))
}
