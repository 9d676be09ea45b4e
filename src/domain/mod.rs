pub mod error;
pub mod fields;
pub mod interaction;
pub mod step;
