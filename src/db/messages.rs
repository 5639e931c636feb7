// Contact form messages
use crate::db::models::{next_id, timestamp, Document, Message};

impl Document {
    pub fn add_message(&mut self, name: &str, email: &str, message: &str) -> Message {
        let message = Message {
            id: next_id(self.messages.len()),
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            date: timestamp(),
            read: false,
        };
        self.messages.push(message.clone());
        message
    }
}
