use contact_models::contact::FieldErrors;
use serde::Serialize;

#[derive(Serialize)]
pub struct ApiMessage {
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct ApiValidationError {
    pub message: &'static str,
    pub errors: FieldErrors,
}
