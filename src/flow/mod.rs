pub mod contact;
pub mod extract;
pub mod help;
pub(crate) mod markup;
pub mod router;
pub mod ticket;

pub const OPEN_INITIAL_DIALOG: &str = "openInitialDialog";
pub const OPEN_CONFIRMATION: &str = "openConfirmation";
pub const SUBMIT_FORM: &str = "submitForm";
pub const CLOSE_CARD: &str = "closeCard";
pub const SUBMIT_TICKET: &str = "submitTicket";

pub const HELP_COMMAND_ID: i64 = 1;
pub const ADD_CONTACT_COMMAND_ID: i64 = 2;
pub const OPEN_TICKET_COMMAND_ID: i64 = 3;
