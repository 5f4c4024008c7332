//! Storage port — repository trait for user persistence.
//!
//! Every method maps to exactly one statement in a relational adapter, so
//! implementations need no transactions.

use std::future::Future;

use userbase_domain::error::UserbaseError;
use userbase_domain::id::UserId;
use userbase_domain::user::{NewUser, User, UserChanges};

/// Persistence operations over user records.
pub trait UserRepository {
    /// Insert a new record and return it with its storage-assigned id.
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, UserbaseError>> + Send;

    /// Fetch a single record, `None` when absent.
    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, UserbaseError>> + Send;

    /// Fetch every record ordered by ascending id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, UserbaseError>> + Send;

    /// Overwrite both fields of an existing record.
    ///
    /// Returns `None` when no record with `id` exists; nothing is created.
    fn update(
        &self,
        id: UserId,
        changes: UserChanges,
    ) -> impl Future<Output = Result<Option<User>, UserbaseError>> + Send;

    /// Remove a record and return its last state, `None` when absent.
    fn delete(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, UserbaseError>> + Send;
}

impl<T: UserRepository + Send + Sync> UserRepository for std::sync::Arc<T> {
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, UserbaseError>> + Send {
        (**self).create(user)
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, UserbaseError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, UserbaseError>> + Send {
        (**self).get_all()
    }

    fn update(
        &self,
        id: UserId,
        changes: UserChanges,
    ) -> impl Future<Output = Result<Option<User>, UserbaseError>> + Send {
        (**self).update(id, changes)
    }

    fn delete(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, UserbaseError>> + Send {
        (**self).delete(id)
    }
}
