//! Shared helpers for the marketplace workspace: logging setup, response
//! envelopes and form-value parsing.

pub mod form;
pub mod types;

pub mod utils {
    pub mod logging;
}
