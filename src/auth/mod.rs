pub mod error;

use std::borrow::Cow;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use validator::{Validate, ValidateEmail, ValidateLength, ValidationError, ValidationErrors};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: SecretString,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !self.email.validate_length(Some(1), Some(100), None) {
            errors.add(
                "email",
                ValidationError::new("email_required")
                    .with_message(Cow::from("Please fill in all fields")),
            );
        }

        if !self
            .password
            .expose_secret()
            .validate_length(Some(1), None, None)
        {
            errors.add(
                "password",
                ValidationError::new("password_required")
                    .with_message(Cow::from("Please fill in all fields")),
            );
        }

        if !errors.errors().is_empty() {
            return Err(errors);
        }

        Ok(())
    }
}

#[derive(Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl Validate for SignupRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !self.username.validate_length(Some(1), Some(100), None) {
            errors.add(
                "username",
                ValidationError::new("username_required")
                    .with_message(Cow::from("Please fill in all fields")),
            );
        }

        if !self.email.validate_length(Some(1), Some(100), None) {
            errors.add(
                "email",
                ValidationError::new("email_required")
                    .with_message(Cow::from("Please fill in all fields")),
            );
        } else if !self.email.validate_email() {
            errors.add(
                "email",
                ValidationError::new("email_email")
                    .with_message(Cow::from("Incorrect email format")),
            );
        }

        let password = self.password.expose_secret();
        if !password.validate_length(Some(1), None, None) {
            errors.add(
                "password",
                ValidationError::new("password_required")
                    .with_message(Cow::from("Please fill in all fields")),
            );
        } else if password != self.confirm_password.expose_secret() {
            errors.add(
                "confirm_password",
                ValidationError::new("password_mismatch")
                    .with_message(Cow::from("Passwords do not match")),
            );
        }

        if !errors.errors().is_empty() {
            return Err(errors);
        }

        Ok(())
    }
}
