//! Error types for order submission.

use thiserror::Error;

/// The draft is missing a required field.
///
/// Both flags can be set at once. The draft is left untouched so the form
/// can be corrected and submitted again.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Missing {}", missing_fields(.missing_client, .missing_payment))]
pub struct ValidationError {
    pub missing_client: bool,
    pub missing_payment: bool,
}

fn missing_fields(client: &bool, payment: &bool) -> &'static str {
    match (*client, *payment) {
        (true, true) => "client name and payment method",
        (true, false) => "client name",
        (false, true) => "payment method",
        (false, false) => "nothing",
    }
}
