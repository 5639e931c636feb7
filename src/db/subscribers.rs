// Newsletter subscriber operations
use crate::db::models::{next_id, timestamp, Document, Subscriber};

impl Document {
    /// Exact, case-sensitive match on the stored email
    pub fn has_subscriber(&self, email: &str) -> bool {
        self.subscribers.iter().any(|s| s.email == email)
    }

    pub fn add_subscriber(&mut self, email: &str) -> Subscriber {
        let subscriber = Subscriber {
            id: next_id(self.subscribers.len()),
            email: email.to_string(),
            date: timestamp(),
        };
        self.subscribers.push(subscriber.clone());
        subscriber
    }
}
