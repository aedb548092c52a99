//! Accounts: registration, login and user details.
//!
//! The crate never keeps a session store of its own. `login` hands back a
//! [`Session`] and every other operation takes one.

mod password;
mod session;

pub use password::*;
pub use session::*;

use thiserror::Error;

use crate::db::{Database, DbError};
use crate::models::{Registration, User, UserDetailsUpdate};
use crate::validation::{self, normalize_optional, ValidationError, Validator};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Account errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error(transparent)]
    Unauthenticated(#[from] Unauthenticated),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Email already registered: {0}")]
    EmailTaken(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    #[error("Store failure: {0}")]
    Store(#[from] DbError),
}

pub type AuthResult<T> = Result<T, AuthError>;

/// Account operations over the user table.
pub struct Accounts<'a> {
    db: &'a Database,
    hasher: &'a dyn PasswordHasher,
}

impl<'a> Accounts<'a> {
    pub fn new(db: &'a Database, hasher: &'a dyn PasswordHasher) -> Self {
        Self { db, hasher }
    }

    /// Register a new user after validating the form.
    pub fn register(&self, form: &Registration) -> AuthResult<User> {
        let email = form.email.trim().to_string();
        let phone = normalize_optional(form.phone.clone());

        Validator::new()
            .require(&form.username, "Username is required")
            .check(validation::is_account_email(&email), "Please enter a valid email address")
            .check(
                form.password.chars().count() >= MIN_PASSWORD_LEN,
                format!("Password must be at least {} characters long", MIN_PASSWORD_LEN),
            )
            .check(form.password == form.confirm_password, "Passwords do not match")
            .require(&form.address, "Address is required")
            .optional_phone(phone.as_deref(), "Phone number must be exactly 11 digits")
            .finish()
            .inspect_err(|e| tracing::warn!(error = %e, "Registration rejected"))?;

        if self.db.email_registered(&email)? {
            tracing::warn!("Registration rejected: email already registered");
            return Err(AuthError::EmailTaken(email));
        }

        let password_hash = self.hasher.hash(&form.password)?;
        let mut user = User::new(
            form.username.trim().to_string(),
            email,
            password_hash,
            form.address.trim().to_string(),
        );
        user.phone = phone;
        self.db.insert_user(&user)?;

        tracing::info!(owner_id = %user.user_id, "Registered user");
        Ok(user)
    }

    /// Check credentials and open a session for the user.
    pub fn login(&self, email: &str, password: &str) -> AuthResult<Session> {
        let email = email.trim().to_lowercase();
        if email.is_empty() || password.is_empty() || !validation::is_account_email(&email) {
            tracing::warn!("Login rejected: missing or malformed credentials");
            return Err(AuthError::InvalidCredentials);
        }

        let user = self.db.get_user_by_email(&email)?.ok_or_else(|| {
            tracing::warn!("Login rejected: unknown email");
            AuthError::UserNotFound
        })?;

        if !self.hasher.verify(password, &user.password_hash)? {
            tracing::warn!(owner_id = %user.user_id, "Login rejected: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(owner_id = %user.user_id, "User logged in");
        Ok(Session::for_owner(user.user_id))
    }

    /// Username for the logged-in user.
    pub fn username(&self, session: &Session) -> AuthResult<String> {
        Ok(self.user_details(session)?.username)
    }

    /// Full details for the logged-in user.
    pub fn user_details(&self, session: &Session) -> AuthResult<User> {
        let owner_id = session.require_owner()?;
        self.db.get_user(owner_id)?.ok_or(AuthError::UserNotFound)
    }

    /// Update the logged-in user's details.
    pub fn update_user_details(&self, session: &Session, update: &UserDetailsUpdate) -> AuthResult<User> {
        let owner_id = session.require_owner()?;
        let update = UserDetailsUpdate {
            username: update.username.trim().to_string(),
            email: update.email.trim().to_string(),
            address: update.address.trim().to_string(),
            phone: normalize_optional(update.phone.clone()),
        };

        Validator::new()
            .check(
                validation::is_person_name(&update.username),
                "Name should only contain letters and spaces.",
            )
            .check(
                validation::is_account_email(&update.email),
                "Please enter a valid email address.",
            )
            .require(&update.address, "Address is required.")
            .optional_phone(update.phone.as_deref(), "Phone number must be exactly 11 digits.")
            .finish()?;

        if let Some(existing) = self.db.get_user_by_email(&update.email)? {
            if existing.user_id != owner_id {
                return Err(AuthError::EmailTaken(update.email));
            }
        }

        if !self.db.update_user_details(owner_id, &update)? {
            return Err(AuthError::UserNotFound);
        }

        tracing::info!(owner_id, "Updated user details");
        self.user_details(&Session::for_owner(owner_id))
    }
}
