//! User service — use-cases for managing user records.

use userbase_domain::error::{NotFoundError, UserbaseError};
use userbase_domain::id::UserId;
use userbase_domain::user::{NewUser, User, UserChanges};

use crate::ports::UserRepository;

const ENTITY: &str = "User";

fn not_found(id: UserId) -> UserbaseError {
    NotFoundError {
        entity: ENTITY,
        id: id.to_string(),
    }
    .into()
}

/// Application service for user CRUD operations.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new user after checking that `name` and `email` are present.
    ///
    /// # Errors
    ///
    /// Returns [`UserbaseError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, user))]
    pub async fn create_user(&self, user: NewUser) -> Result<User, UserbaseError> {
        user.validate()?;
        let created = self.repo.create(user).await?;
        tracing::debug!(id = %created.id, "user created");
        Ok(created)
    }

    /// Look up a user by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`UserbaseError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<User, UserbaseError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// List all users ordered by ascending id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, UserbaseError> {
        self.repo.get_all().await
    }

    /// Overwrite an existing user with `changes`.
    ///
    /// # Errors
    ///
    /// Returns [`UserbaseError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, changes))]
    pub async fn update_user(
        &self,
        id: UserId,
        changes: UserChanges,
    ) -> Result<User, UserbaseError> {
        self.repo
            .update(id, changes)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Delete a user by id and return its last stored state.
    ///
    /// # Errors
    ///
    /// Returns [`UserbaseError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, id: UserId) -> Result<User, UserbaseError> {
        let deleted = self.repo.delete(id).await?.ok_or_else(|| not_found(id))?;
        tracing::debug!(%id, "user deleted");
        Ok(deleted)
    }
}
