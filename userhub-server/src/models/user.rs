//! User record and update payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Canonical persisted user row, keyed by `uuid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    pub uuid: String,
    pub name: String,
    pub email: String,
    pub city: String,
}

/// Replacement values for an existing user.
///
/// Only constructible through [`UserUpdate::new`], so every instance
/// carries three non-empty fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    name: String,
    email: String,
    city: String,
}

impl UserUpdate {
    /// Validate and build an update. Values are kept as sent; missing or empty
    /// fields are rejected in the order name, email, city.
    pub fn new(
        name: Option<&str>,
        email: Option<&str>,
        city: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required("name", name)?,
            email: required("email", email)?,
            city: required("city", city)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

fn required(field: &'static str, value: Option<&str>) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_owned()),
        _ => Err(ValidationError::Empty { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_keeps_values_verbatim() {
        let update = UserUpdate::new(Some(" Amy Pond "), Some("amy@example.com"), Some("   "))
            .unwrap();
        assert_eq!(update.name(), " Amy Pond ");
        assert_eq!(update.email(), "amy@example.com");
        assert_eq!(update.city(), "   ");
    }

    #[test]
    fn update_rejects_empty_city() {
        let err = UserUpdate::new(Some("Amy"), Some("amy@example.com"), Some("")).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "city" });
    }

    #[test]
    fn update_rejects_missing_and_empty_fields() {
        assert_eq!(
            UserUpdate::new(None, Some("a@b.c"), Some("X")).unwrap_err(),
            ValidationError::Empty { field: "name" }
        );
        assert_eq!(
            UserUpdate::new(Some("Amy"), Some(""), Some("X")).unwrap_err(),
            ValidationError::Empty { field: "email" }
        );
        assert_eq!(
            UserUpdate::new(Some("Amy"), Some("a@b.c"), None).unwrap_err(),
            ValidationError::Empty { field: "city" }
        );
    }
}
