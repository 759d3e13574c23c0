pub mod formatters;
pub mod handler_404;
pub mod request_sequencer;
