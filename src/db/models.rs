use serde::{Deserialize, Deserializer, Serialize};

/// The whole persisted store. Field order is the on-disk key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "normalize_subscribers")]
    pub subscribers: Vec<Subscriber>,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscriber {
    pub id: String,
    pub email: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub date: String,
    pub read: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    /// Hex SHA-256 of password + salt
    pub password: String,
    pub salt: String,
    pub date: String,
}

// Older stores kept subscribers as bare email strings
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredSubscriber {
    Email(String),
    Record(Subscriber),
}

fn normalize_subscribers<'de, D>(deserializer: D) -> Result<Vec<Subscriber>, D::Error>
where
    D: Deserializer<'de>,
{
    let stored = Vec::<StoredSubscriber>::deserialize(deserializer)?;
    Ok(stored
        .into_iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            StoredSubscriber::Email(email) => Subscriber {
                id: next_id(index),
                email,
                date: String::new(),
            },
            StoredSubscriber::Record(subscriber) => subscriber,
        })
        .collect())
}

/// Sequence id for a record appended to a collection of `len` items
pub(crate) fn next_id(len: usize) -> String {
    (len + 1).to_string()
}

pub(crate) fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_string_subscribers_are_normalized() {
        let raw = r#"{
            "subscribers": ["old@example.com", {"id": "2", "email": "new@example.com", "date": "now"}],
            "messages": [],
            "users": []
        }"#;
        let doc: Document = serde_json::from_str(raw).unwrap();

        assert_eq!(
            doc.subscribers,
            vec![
                Subscriber {
                    id: "1".to_string(),
                    email: "old@example.com".to_string(),
                    date: String::new(),
                },
                Subscriber {
                    id: "2".to_string(),
                    email: "new@example.com".to_string(),
                    date: "now".to_string(),
                },
            ]
        );
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let doc: Document = serde_json::from_str("{}").unwrap();
        assert_eq!(doc, Document::default());
    }

    #[test]
    fn serializes_in_stable_key_order() {
        let json = serde_json::to_string(&Document::default()).unwrap();
        assert_eq!(json, r#"{"subscribers":[],"messages":[],"users":[]}"#);
    }
}
