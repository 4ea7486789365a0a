//! The simulated identity flow: sign-up, sign-in and sign-out over the blob
//! store.
//!
//! The active session is the `currentUser` blob; registered users live in
//! their own blob and survive sign-out. Credentials are compared by the
//! deterministic SHA-256 hash in
//! [PasswordHash](crate::models::PasswordHash) — this stands in for an
//! external identity provider and is not a salted password scheme.

use crate::{
    Error,
    models::{DEFAULT_BUSINESS_TYPE, PasswordHash, User, UserId},
    store::{BlobStore, CURRENT_USER_KEY, REGISTERED_USERS_KEY},
};

// The record the simulated external provider hands back.
const PROVIDER_USER_ID: &str = "google_user_123";
const PROVIDER_USER_NAME: &str = "Google User";
const PROVIDER_USER_EMAIL: &str = "google@example.com";
const PROVIDER_PHOTO_URL: &str = "https://example.com/photo.jpg";

/// Authenticates users and tracks the active session.
#[derive(Debug)]
pub struct AuthService<S: BlobStore> {
    store: S,
    current: Option<User>,
}

impl<S: BlobStore> AuthService<S> {
    /// Create the service, restoring any persisted session and migrating
    /// legacy user records that predate password hashing.
    pub fn new(store: S) -> Result<Self, Error> {
        let current = store.read_json(CURRENT_USER_KEY)?;
        let mut service = Self { store, current };
        service.migrate_legacy_users()?;

        Ok(service)
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Whether a session is active.
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Register a new user and sign them in.
    ///
    /// # Errors
    /// Returns [Error::EmptyField] when the name, email or password is
    /// empty, and [Error::DuplicateEmail] when a registered user already has
    /// the email (compared case-insensitively).
    pub fn sign_up(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        business_type: Option<&str>,
    ) -> Result<User, Error> {
        if name.trim().is_empty() {
            return Err(Error::EmptyField("name"));
        }
        if email.trim().is_empty() {
            return Err(Error::EmptyField("email"));
        }
        if password.is_empty() {
            return Err(Error::EmptyField("password"));
        }

        let mut users = self.registered_users()?;
        if users.iter().any(|user| user.email_matches(email)) {
            return Err(Error::DuplicateEmail);
        }

        let user = User::new(
            name,
            email,
            business_type.unwrap_or(DEFAULT_BUSINESS_TYPE),
            Some(PasswordHash::new(password)),
        );
        users.push(user.clone());
        self.store.write_json(REGISTERED_USERS_KEY, &users)?;
        self.set_current(user.clone())?;
        tracing::info!(user_id = %user.id(), "registered new user");

        Ok(user)
    }

    /// Sign in with an email and password.
    ///
    /// # Errors
    /// Returns [Error::UnknownEmail] when no registered user has the email
    /// and [Error::WrongPassword] when the hash comparison fails. Neither
    /// error mutates the session.
    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<User, Error> {
        let users = self.registered_users()?;
        let user = users
            .iter()
            .find(|user| user.email_matches(email))
            .ok_or(Error::UnknownEmail)?;

        let matches = user
            .password_hash()
            .is_some_and(|hash| hash.verify(password));
        if !matches {
            tracing::debug!(email, "sign-in rejected: wrong password");
            return Err(Error::WrongPassword);
        }

        let user = user.clone();
        self.set_current(user.clone())?;
        tracing::info!(user_id = %user.id(), "user signed in");

        Ok(user)
    }

    /// Sign in through the simulated external identity provider.
    ///
    /// The provider always hands back the same fixed user record. It is
    /// registered on first use; later calls reuse the already registered
    /// entry. No password is involved.
    pub fn sign_in_with_provider(&mut self) -> Result<User, Error> {
        let mut users = self.registered_users()?;
        let user = match users
            .iter()
            .find(|user| user.email_matches(PROVIDER_USER_EMAIL))
        {
            Some(user) => user.clone(),
            None => {
                let user = User::provider(
                    UserId::new(PROVIDER_USER_ID),
                    PROVIDER_USER_NAME,
                    PROVIDER_USER_EMAIL,
                    PROVIDER_PHOTO_URL,
                );
                users.push(user.clone());
                self.store.write_json(REGISTERED_USERS_KEY, &users)?;
                user
            }
        };

        self.set_current(user.clone())?;
        tracing::info!(user_id = %user.id(), "user signed in via provider");

        Ok(user)
    }

    /// End the session. The user's entry in the registered list persists.
    pub fn sign_out(&mut self) -> Result<(), Error> {
        if let Some(user) = self.current.take() {
            tracing::info!(user_id = %user.id(), "user signed out");
        }
        self.store.delete(CURRENT_USER_KEY)
    }

    /// Look up a registered user by email, compared case-insensitively.
    pub fn find_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        let users = self.registered_users()?;

        Ok(users.into_iter().find(|user| user.email_matches(email)))
    }

    /// Assign the hash of `"password"` to registered users persisted before
    /// password hashing existed.
    fn migrate_legacy_users(&mut self) -> Result<(), Error> {
        let mut users = self.registered_users()?;
        let mut migrated = 0usize;

        for user in &mut users {
            if user.password_hash.is_none() {
                user.password_hash = Some(PasswordHash::new("password"));
                migrated += 1;
            }
        }

        if migrated > 0 {
            self.store.write_json(REGISTERED_USERS_KEY, &users)?;
            tracing::info!(migrated, "assigned default password hash to legacy users");
        }

        Ok(())
    }

    fn registered_users(&self) -> Result<Vec<User>, Error> {
        Ok(self
            .store
            .read_json(REGISTERED_USERS_KEY)?
            .unwrap_or_default())
    }

    fn set_current(&mut self, user: User) -> Result<(), Error> {
        self.store.write_json(CURRENT_USER_KEY, &user)?;
        self.current = Some(user);

        Ok(())
    }
}
