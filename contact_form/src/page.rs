use std::fmt;

use contact_models::contact::{ContactField, ContactSubmission, FieldErrors};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use crate::{
    api::{ContactApiError, ContactApiService},
    state::{Banner, FormEvent, FormState, FormTransitionError},
};

pub const TITLE: &str = "お問い合わせ";
pub const SUBMIT_LABEL: &str = "送信";
pub const SUBMITTING_LABEL: &str = "送信中...";

/// Raw values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("fields cannot be edited while a submission is in progress")]
pub struct FormBusyError;

/// The contact form page: field values, inline errors and the submission
/// state, independent of how it is presented.
#[derive(Debug)]
pub struct ContactFormPage<Api> {
    api: Api,
    fields: FormFields,
    field_errors: FieldErrors,
    state: FormState,
}

pub fn label(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "お名前",
        ContactField::Email => "メールアドレス",
        ContactField::Message => "メッセージ",
    }
}

impl FormFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }
}

impl<Api> ContactFormPage<Api> {
    pub fn new(api: Api) -> Self {
        Self {
            api,
            fields: FormFields::default(),
            field_errors: FieldErrors::default(),
            state: FormState::Idle,
        }
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn field(&self, field: ContactField) -> &str {
        self.fields.get(field)
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.state.is_submit_enabled()
    }

    pub fn banner(&self) -> Option<Banner<'_>> {
        self.state.banner()
    }

    pub fn set_field(
        &mut self,
        field: ContactField,
        value: impl Into<String>,
    ) -> Result<(), FormBusyError> {
        if !self.state.is_editable() {
            return Err(FormBusyError);
        }
        *self.fields.get_mut(field) = value.into();
        Ok(())
    }

    /// Starts a submission attempt: clears the previous outcome and validates
    /// the fields locally.
    ///
    /// Returns the submission to send if local validation passed. Otherwise
    /// the field errors are updated and the form is editable again.
    pub fn begin_submit(&mut self) -> Result<Option<ContactSubmission>, FormTransitionError> {
        self.state = self.state.transition(FormEvent::Submit)?;
        self.field_errors = FieldErrors::default();

        let input = json!({
            "name": self.fields.name,
            "email": self.fields.email,
            "message": self.fields.message,
        });

        match ContactSubmission::validate(&input) {
            Ok(submission) => {
                self.state = self.state.transition(FormEvent::ValidationPassed)?;
                Ok(Some(submission))
            }
            Err(errors) => {
                self.field_errors = errors;
                self.state = self.state.transition(FormEvent::ValidationFailed)?;
                Ok(None)
            }
        }
    }

    /// Applies the result of the request started by [`Self::begin_submit`].
    pub fn finish_submit(
        &mut self,
        result: Result<String, ContactApiError>,
    ) -> Result<(), FormTransitionError> {
        let event = match result {
            Ok(message) => FormEvent::Succeeded(message),
            Err(err) => {
                warn!(error = ?err, "contact submission failed");
                FormEvent::Failed(err.user_message().into())
            }
        };

        self.state = self.state.transition(event)?;
        if let FormState::Success { .. } = self.state {
            self.fields = FormFields::default();
        }
        Ok(())
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<Api> ContactFormPage<Api>
where
    Api: ContactApiService,
{
    /// Runs a full submission attempt with at most one request.
    pub async fn submit(&mut self) -> Result<(), FormTransitionError> {
        let Some(submission) = self.begin_submit()? else {
            return Ok(());
        };
        let result = self.api.submit(&submission).await;
        self.finish_submit(result)
    }
}

impl<Api> fmt::Display for ContactFormPage<Api> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;

        match self.banner() {
            Some(Banner::Success(message)) => writeln!(f, "[✓] {message}")?,
            Some(Banner::Error(message)) => writeln!(f, "[!] {message}")?,
            None => {}
        }

        for field in ContactField::ALL {
            writeln!(f)?;
            writeln!(f, "{}", label(field))?;
            writeln!(f, "  > {}", self.field(field))?;
            for error in self.field_errors.get(field) {
                writeln!(f, "  ! {error}")?;
            }
        }

        writeln!(f)?;
        let label = match self.state {
            FormState::Submitting => SUBMITTING_LABEL,
            _ => SUBMIT_LABEL,
        };
        if self.is_submit_enabled() {
            write!(f, "[ {label} ]")
        } else {
            write!(f, "( {label} )")
        }
    }
}
