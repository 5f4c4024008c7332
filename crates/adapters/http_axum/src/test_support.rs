//! In-memory repository used by the router and handler tests.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use userbase_app::ports::UserRepository;
use userbase_domain::error::UserbaseError;
use userbase_domain::id::UserId;
use userbase_domain::user::{NewUser, User, UserChanges};

#[derive(Default)]
struct Store {
    last_id: i32,
    rows: BTreeMap<UserId, User>,
}

/// Mimics a `SERIAL` table: ids grow monotonically and are never reused.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: Mutex<Store>,
    fail_next: AtomicBool,
}

impl InMemoryUserRepository {
    pub fn len(&self) -> usize {
        self.store.lock().unwrap().rows.len()
    }

    /// Make the next repository call return a storage error.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), UserbaseError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(UserbaseError::Storage("simulated outage".into()));
        }
        Ok(())
    }
}

impl UserRepository for InMemoryUserRepository {
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, UserbaseError>> + Send {
        let result = self.check().map(|()| {
            let mut store = self.store.lock().unwrap();
            store.last_id += 1;
            let created = User {
                id: UserId::from_raw(store.last_id),
                name: Some(user.name),
                email: Some(user.email),
            };
            store.rows.insert(created.id, created.clone());
            created
        });
        async { result }
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, UserbaseError>> + Send {
        let result = self
            .check()
            .map(|()| self.store.lock().unwrap().rows.get(&id).cloned());
        async { result }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, UserbaseError>> + Send {
        let result: Result<Vec<User>, UserbaseError> = self
            .check()
            .map(|()| self.store.lock().unwrap().rows.values().cloned().collect());
        async { result }
    }

    fn update(
        &self,
        id: UserId,
        changes: UserChanges,
    ) -> impl Future<Output = Result<Option<User>, UserbaseError>> + Send {
        let result = self.check().map(|()| {
            let mut store = self.store.lock().unwrap();
            store.rows.get_mut(&id).map(|stored| {
                *stored = changes.apply(stored.clone());
                stored.clone()
            })
        });
        async { result }
    }

    fn delete(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, UserbaseError>> + Send {
        let result = self
            .check()
            .map(|()| self.store.lock().unwrap().rows.remove(&id));
        async { result }
    }
}
