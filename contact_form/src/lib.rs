//! Client side of the contact form: a page controller driven by an explicit
//! state machine, the http client for the submission endpoint and a terminal
//! front end.

pub mod api;
mod http;
pub mod page;
pub mod state;
pub mod terminal;
