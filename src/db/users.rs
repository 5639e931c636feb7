// User account operations
use crate::db::models::{next_id, timestamp, Document, User};

/// Which uniqueness rule a new account would break
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserConflict {
    Username,
    Email,
}

impl Document {
    pub fn find_user_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    /// First clash in storage order; within one record the username wins.
    pub fn find_user_conflict(&self, username: &str, email: &str) -> Option<UserConflict> {
        self.users.iter().find_map(|u| {
            if u.username == username {
                Some(UserConflict::Username)
            } else if u.email == email {
                Some(UserConflict::Email)
            } else {
                None
            }
        })
    }

    pub fn add_user(
        &mut self,
        username: &str,
        email: &str,
        password_hash: &str,
        salt: &str,
    ) -> User {
        let user = User {
            id: next_id(self.users.len()),
            username: username.to_string(),
            email: email.to_string(),
            password: password_hash.to_string(),
            salt: salt.to_string(),
            date: timestamp(),
        };
        self.users.push(user.clone());
        user
    }
}
