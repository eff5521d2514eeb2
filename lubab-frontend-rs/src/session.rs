//! Durable session state: the logged-in user, the student's progress record,
//! and the onboarding setup, each under its own fixed localStorage key.
//!
//! Reads treat malformed stored text as absence. Writes are fire-and-forget:
//! when no storage area exists (non-browser context) they are silently
//! skipped, matching how the app has always behaved during server-side
//! rendering.

use std::cell::RefCell;
use std::collections::HashMap;

use lubab_utils::{StudentProgress, StudentSetup, User, UserRole};

use crate::catalog::Catalog;

pub const USER_KEY: &str = "lubab_user";
pub const PROGRESS_KEY: &str = "lubab_progress";
pub const SETUP_KEY: &str = "lubab_student_setup";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
}

/// String key-value persistence. The browser implementation sits on
/// localStorage; tests use [`MemoryStore`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// localStorage-backed store. Every accessor re-resolves the storage area so
/// a missing `window` (or storage denied by the browser) degrades to no-ops
/// instead of panicking.
pub struct BrowserStorage;

impl BrowserStorage {
    fn area() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::area()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(area) = Self::area() {
            let _ = area.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(area) = Self::area() {
            let _ = area.remove_item(key);
        }
    }
}

/// In-memory backend for targets without a browser storage area.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// The explicit repository object for session state. Initialized when the
/// session starts and passed to whatever needs persistence; nothing touches
/// the storage keys directly.
pub struct SessionStore {
    backend: Box<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    fn read<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let text = self.backend.get(key)?;
        serde_json::from_str(&text).ok()
    }

    fn write<T: serde::Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.backend.set(key, &json),
            Err(e) => log::error!("failed to serialize {key}: {e}"),
        }
    }

    /// Checks the credentials against the catalog's demo accounts and
    /// persists the matching user.
    pub fn login(
        &self,
        catalog: &dyn Catalog,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let user = catalog
            .demo_users()
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned()
            .ok_or(AuthError::InvalidCredentials)?;
        self.write(USER_KEY, &user);
        Ok(user)
    }

    /// Removes only the user record. Progress and setup survive so the
    /// student can pick up where they left off after logging back in.
    pub fn logout(&self) {
        self.backend.remove(USER_KEY);
    }

    pub fn current_user(&self) -> Option<User> {
        self.read(USER_KEY)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    pub fn progress(&self) -> Option<StudentProgress> {
        self.read(PROGRESS_KEY)
    }

    pub fn save_progress(&self, progress: &StudentProgress) {
        self.write(PROGRESS_KEY, progress);
    }

    /// Returns the stored progress when it belongs to `student_id`, otherwise
    /// creates, persists, and returns a zeroed record. Guards against
    /// applying one student's progress to another after an account switch.
    pub fn initialize_progress(&self, student_id: &str) -> StudentProgress {
        if let Some(existing) = self.progress()
            && existing.student_id == student_id
        {
            return existing;
        }

        let fresh = StudentProgress::new(student_id);
        self.save_progress(&fresh);
        fresh
    }

    pub fn student_setup(&self) -> Option<StudentSetup> {
        self.read(SETUP_KEY)
    }

    /// Persists the onboarding choices and renames the stored user to the
    /// name entered during setup.
    pub fn save_student_setup(&self, setup: &StudentSetup) {
        self.write(SETUP_KEY, setup);

        if let Some(mut user) = self.current_user() {
            user.name = setup.name.clone();
            self.write(USER_KEY, &user);
        }
    }

    /// The student whose progress this session shows: the student themselves,
    /// or the child linked to a logged-in parent.
    pub fn effective_student_id(&self) -> Option<String> {
        let user = self.current_user()?;
        match user.role {
            UserRole::Student => Some(user.id),
            UserRole::Parent => user.student_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EmbeddedCatalog;

    fn store() -> SessionStore {
        SessionStore::new(Box::new(MemoryStore::default()))
    }

    #[test]
    fn login_round_trips_the_user() {
        let store = store();
        let catalog = EmbeddedCatalog::new();

        let user = store
            .login(&catalog, "student@lubab.com", "123456")
            .unwrap();
        assert_eq!(user.id, "student-1");
        assert_eq!(store.current_user().unwrap().id, "student-1");
        assert!(store.is_authenticated());
    }

    #[test]
    fn bad_credentials_are_rejected_without_persisting() {
        let store = store();
        let catalog = EmbeddedCatalog::new();

        let err = store
            .login(&catalog, "student@lubab.com", "wrong")
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert!(store.current_user().is_none());
    }

    #[test]
    fn logout_keeps_progress_and_setup() {
        let store = store();
        let catalog = EmbeddedCatalog::new();
        store
            .login(&catalog, "student@lubab.com", "123456")
            .unwrap();
        store.initialize_progress("student-1");

        store.logout();

        assert!(store.current_user().is_none());
        assert!(store.progress().is_some());
    }

    #[test]
    fn initialize_progress_is_idempotent() {
        let store = store();

        let mut first = store.initialize_progress("student-1");
        first.lessons_completed.push("math-lesson-1".to_string());
        store.save_progress(&first);

        let second = store.initialize_progress("student-1");
        assert_eq!(second, first);
    }

    #[test]
    fn initialize_progress_replaces_another_students_record() {
        let store = store();

        let mut other = store.initialize_progress("student-2");
        other.lessons_completed.push("math-lesson-1".to_string());
        store.save_progress(&other);

        let mine = store.initialize_progress("student-1");
        assert_eq!(mine.student_id, "student-1");
        assert!(mine.lessons_completed.is_empty());
        assert_eq!(store.progress().unwrap().student_id, "student-1");
    }

    #[test]
    fn malformed_stored_json_reads_as_absent() {
        let store = store();
        store.backend.set(PROGRESS_KEY, "{not json");
        assert!(store.progress().is_none());

        // and re-initialization recovers
        let fresh = store.initialize_progress("student-1");
        assert_eq!(fresh, StudentProgress::new("student-1"));
    }

    #[test]
    fn saving_setup_renames_the_stored_user() {
        let store = store();
        let catalog = EmbeddedCatalog::new();
        store
            .login(&catalog, "student@lubab.com", "123456")
            .unwrap();

        store.save_student_setup(&StudentSetup {
            name: "سارة".to_string(),
            grade_id: "grade-5".to_string(),
            subject_ids: vec!["math".to_string()],
        });

        assert_eq!(store.current_user().unwrap().name, "سارة");
        assert_eq!(store.student_setup().unwrap().grade_id, "grade-5");
    }

    #[test]
    fn effective_student_id_follows_the_parent_link() {
        let store = store();
        let catalog = EmbeddedCatalog::new();
        store.login(&catalog, "parent@lubab.com", "123456").unwrap();
        assert_eq!(store.effective_student_id().as_deref(), Some("student-1"));
    }
}
