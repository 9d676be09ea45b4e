mod events;
mod normalize;

pub use events::{
    ActionParameter, AddOnChat, AppCommandMetadata, AppCommandPayload, ChatEvent, ChatUser,
    CommonEventObject, DialogMarkers, LegacyAction, LegacyMessage, RawDateInput, RawFormInput,
    SlashCommandDescriptor, StringInputs,
};
pub use normalize::{normalize, normalize_event};

pub const DIALOG_SUBMIT_EVENT: &str = "SUBMIT_DIALOG";
pub const MESSAGE_EVENT: &str = "MESSAGE";
