//! User administration.
//!
//! Validate locally, send the mutation, then refetch the list. There are
//! no optimistic updates; the list shown is always the server's latest
//! answer.

use std::sync::Arc;

use tiket_client::FetchOutcome;
use tiket_core::user::{NewUser, User, UserUpdate};

use crate::source::UserDirectory;

/// User management over a [`UserDirectory`].
pub struct UserAdmin {
    directory: Arc<dyn UserDirectory>,
    users: Vec<User>,
}

impl UserAdmin {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            directory,
            users: Vec::new(),
        }
    }

    /// The most recently fetched user list.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Refetches the list. Returns the number of users on success.
    pub async fn refresh(&mut self) -> FetchOutcome<usize> {
        match self.directory.list_users().await {
            FetchOutcome::Success(users) => {
                let count = users.len();
                self.users = users;
                FetchOutcome::Success(count)
            }
            FetchOutcome::AuthRequired => FetchOutcome::AuthRequired,
            FetchOutcome::Failed(err) => FetchOutcome::Failed(err),
        }
    }

    /// Creates a user, then refetches the list. Validation failures and
    /// registration errors leave the list untouched.
    pub async fn add_user(&mut self, user: &NewUser) -> FetchOutcome<usize> {
        if let Err(err) = self.directory.register_user(user).await {
            return FetchOutcome::Failed(err);
        }
        tracing::info!(username = %user.username, "user created");
        self.refresh().await
    }

    /// Updates a user, then refetches the list.
    pub async fn edit_user(&mut self, id: i64, update: &UserUpdate) -> FetchOutcome<usize> {
        match self.directory.update_user(id, update).await {
            FetchOutcome::Success(()) => {
                tracing::info!(id, "user updated");
                self.refresh().await
            }
            FetchOutcome::AuthRequired => FetchOutcome::AuthRequired,
            FetchOutcome::Failed(err) => FetchOutcome::Failed(err),
        }
    }

    /// Deletes a user, then refetches the list.
    pub async fn delete_user(&mut self, id: i64) -> FetchOutcome<usize> {
        match self.directory.delete_user(id).await {
            FetchOutcome::Success(()) => {
                tracing::info!(id, "user deleted");
                self.refresh().await
            }
            FetchOutcome::AuthRequired => FetchOutcome::AuthRequired,
            FetchOutcome::Failed(err) => FetchOutcome::Failed(err),
        }
    }
}
