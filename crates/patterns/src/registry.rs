// crates/patterns/src/registry.rs
use thiserror::Error;

/// User record kept by a [`UserStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub age: u8,
}

impl User {
    #[must_use]
    pub fn new(name: impl Into<String>, age: u8) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("user is {age}, must be at least 18")]
    Underage { age: u8 },
}

pub type Result<T> = std::result::Result<T, RegistryError>;

/// One method per CRUD action. Activity logging is deliberately *not* part
/// of this trait; see [`ActivityLog`].
pub trait UserStore {
    /// # Errors
    ///
    /// Rejects users under 18.
    fn add(&mut self, user: &User) -> Result<()>;

    fn get(&self, user: &User);

    /// # Errors
    ///
    /// Rejects users under 18.
    fn update(&mut self, user: &User) -> Result<()>;

    fn delete(&mut self, user: &User);
}

/// Activity monitoring changes for reasons of its own (what to capture, how
/// to capture it), so it lives in its own trait.
pub trait ActivityLog {
    fn record(&self, user: &User);
}

const ADULT_AGE: u8 = 18;

fn require_adult(user: &User) -> Result<()> {
    if user.age < ADULT_AGE {
        return Err(RegistryError::Underage { age: user.age });
    }
    Ok(())
}

/// Stub store: validates preconditions, then logs the action.
#[derive(Debug, Default)]
pub struct LoggingUserStore;

impl UserStore for LoggingUserStore {
    fn add(&mut self, user: &User) -> Result<()> {
        require_adult(user)?;
        log::info!("user {} added", user.name);
        Ok(())
    }

    fn get(&self, user: &User) {
        log::info!("user {} read", user.name);
    }

    fn update(&mut self, user: &User) -> Result<()> {
        require_adult(user)?;
        log::info!("user {} updated", user.name);
        Ok(())
    }

    fn delete(&mut self, user: &User) {
        log::info!("user {} deleted", user.name);
    }
}

/// Stub activity log.
#[derive(Debug, Default)]
pub struct LoggingActivityLog;

impl ActivityLog for LoggingActivityLog {
    fn record(&self, user: &User) {
        log::info!("activity recorded for user {}", user.name);
    }
}
