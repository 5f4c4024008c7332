//! User — the single persisted record kind.

use serde::{Deserialize, Serialize};

use crate::error::{UserbaseError, ValidationError};
use crate::id::UserId;

/// A stored user record.
///
/// `name` and `email` are only guaranteed at creation time; a full-overwrite
/// update may clear them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Validated payload for inserting a new user. Storage assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    /// Create a builder for constructing a [`NewUser`].
    #[must_use]
    pub fn builder() -> NewUserBuilder {
        NewUserBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`UserbaseError::Validation`] when `name` or `email` is empty.
    pub fn validate(&self) -> Result<(), UserbaseError> {
        if self.name.is_empty() {
            return Err(ValidationError::MissingField("name").into());
        }
        if self.email.is_empty() {
            return Err(ValidationError::MissingField("email").into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`NewUser`].
#[derive(Debug, Default)]
pub struct NewUserBuilder {
    name: Option<String>,
    email: Option<String>,
}

impl NewUserBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewUser`].
    ///
    /// # Errors
    ///
    /// Returns [`UserbaseError::Validation`] if `name` or `email` is missing
    /// or empty.
    pub fn build(self) -> Result<NewUser, UserbaseError> {
        let user = NewUser {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
        };
        user.validate()?;
        Ok(user)
    }
}

/// Replacement values written by an update.
///
/// Every field is written as-is: `None` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserChanges {
    /// Apply the changes to an existing record, keeping its id.
    #[must_use]
    pub fn apply(self, user: User) -> User {
        User {
            id: user.id,
            name: self.name,
            email: self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_new_user_when_both_fields_provided() {
        let user = NewUser::builder()
            .name("Ada")
            .email("ada@example.com")
            .build()
            .unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "ada@example.com");
    }

    #[test]
    fn should_reject_new_user_without_name() {
        let result = NewUser::builder().email("ada@example.com").build();
        assert!(matches!(
            result,
            Err(UserbaseError::Validation(ValidationError::MissingField(
                "name"
            )))
        ));
    }

    #[test]
    fn should_reject_new_user_with_empty_email() {
        let result = NewUser::builder().name("Ada").email("").build();
        assert!(matches!(
            result,
            Err(UserbaseError::Validation(ValidationError::MissingField(
                "email"
            )))
        ));
    }

    #[test]
    fn should_clear_fields_absent_from_changes() {
        let user = User {
            id: UserId::from_raw(1),
            name: Some("Ada".to_string()),
            email: Some("ada@example.com".to_string()),
        };
        let changes = UserChanges {
            name: Some("Grace".to_string()),
            email: None,
        };

        let updated = changes.apply(user);
        assert_eq!(updated.id, UserId::from_raw(1));
        assert_eq!(updated.name.as_deref(), Some("Grace"));
        assert!(updated.email.is_none());
    }

    #[test]
    fn should_serialize_missing_fields_as_null() {
        let user = User {
            id: UserId::from_raw(9),
            name: None,
            email: Some("x@example.com".to_string()),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 9, "name": null, "email": "x@example.com"})
        );
    }
}
