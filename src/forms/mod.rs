//! Request bodies validated by the REST routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod workation;

#[derive(Debug, Error)]
/// Errors that can occur when processing a request body.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),
}

impl FormError {
    /// Human readable messages, one per failed rule, in field order.
    pub fn messages(&self) -> Vec<String> {
        match self {
            FormError::Validation(errors) => {
                let mut fields = errors.field_errors().into_iter().collect::<Vec<_>>();
                fields.sort_by(|a, b| a.0.cmp(&b.0));

                fields
                    .into_iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |error| match &error.message {
                            Some(message) => message.to_string(),
                            None => format!("{field} is invalid"),
                        })
                    })
                    .collect()
            }
        }
    }
}
