pub mod application;
pub mod domain;
pub mod flow;
pub mod interfaces;
pub mod protocol;
