// Request parsing shared by the entity handlers.

use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;
use crate::services::UploadFile;

/// Parse a numeric path segment, answering `Invalid <label> ID` otherwise.
pub fn parse_id(raw: &str, label: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ApiError::bad_request(format!("Invalid {} ID", label)))
}

/// A numeric input that may arrive as a JSON number or as text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberField {
    Int(i64),
    Text(String),
}

/// Collects one message per offending field.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn fail(&mut self, field: &str, rule: &str) {
        self.errors
            .push(format!("Error on {} field, condition {}", field, rule));
    }

    pub fn required_text(&mut self, field: &str, value: Option<String>) -> String {
        let value = value.unwrap_or_default();
        if value.trim().is_empty() {
            self.fail(field, "required");
        }
        value
    }

    /// Parses the value; a malformed number is reported and read as zero.
    pub fn optional_number(&mut self, field: &str, value: Option<NumberField>) -> i64 {
        self.parse_number(field, value).unwrap_or(0)
    }

    pub fn required_number(&mut self, field: &str, value: Option<NumberField>) -> i64 {
        match self.parse_number(field, value) {
            Some(0) => {
                self.fail(field, "required");
                0
            }
            Some(n) => n,
            None => 0,
        }
    }

    fn parse_number(&mut self, field: &str, value: Option<NumberField>) -> Option<i64> {
        match value {
            None => Some(0),
            Some(NumberField::Int(n)) => Some(n),
            Some(NumberField::Text(s)) if s.trim().is_empty() => Some(0),
            Some(NumberField::Text(s)) => match s.trim().parse::<i64>() {
                Ok(n) => Some(n),
                Err(_) => {
                    self.fail(field, "number");
                    None
                }
            },
        }
    }

    pub fn email(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            return;
        }
        if !looks_like_email(value) {
            self.fail(field, "email");
        }
    }

    pub fn required_file(&mut self, field: &str, file: Option<UploadFile>) -> Option<UploadFile> {
        if file.is_none() {
            self.fail(field, "required");
        }
        file
    }

    pub fn finish(self) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation_error(self.errors))
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Body extractor accepting JSON or a urlencoded form, chosen by `Content-Type`.
pub struct Payload<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.starts_with("application/x-www-form-urlencoded"))
            .unwrap_or(false);

        if is_form {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::bad_request(e.body_text()))?;
            Ok(Payload(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::bad_request(e.body_text()))?;
            Ok(Payload(value))
        }
    }
}

/// Text fields and the single image file of a multipart form.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    file: Option<UploadFile>,
}

impl MultipartForm {
    pub async fn read(mut multipart: Multipart, file_field: &str) -> Result<Self, ApiError> {
        let mut form = MultipartForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?
        {
            let name = field.name().unwrap_or_default().to_string();
            if name == file_field {
                let file_name = field
                    .file_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| file_field.to_string());
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(e.body_text()))?;
                // browsers send an empty part when no file was picked
                if !bytes.is_empty() {
                    form.file = Some(UploadFile {
                        file_name,
                        content_type,
                        bytes: bytes.to_vec(),
                    });
                }
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(e.body_text()))?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    pub fn text(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    pub fn number(&mut self, name: &str) -> Option<NumberField> {
        self.fields.remove(name).map(NumberField::Text)
    }

    pub fn take_file(&mut self) -> Option<UploadFile> {
        self.file.take()
    }
}
