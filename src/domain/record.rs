use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A finished log record: the unit that travels through the relay graph.
///
/// Built exactly once, when a raw message passes a relay's filter. Fields are
/// private so a record cannot change after construction; every target that
/// receives a forwarded record observes the same `id`, `time` and `message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    id: String,
    time: i64,
    message: String,
}

impl LogRecord {
    /// Stamps a new record with the current time (Unix epoch milliseconds).
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            time: Utc::now().timestamp_millis(),
            message: message.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn time(&self) -> i64 {
        self.time
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Plain attribute form for serialization, storage and assertions.
    pub fn to_plain(&self) -> PlainRecord {
        PlainRecord {
            id: self.id.clone(),
            time: self.time,
            message: self.message.clone(),
        }
    }
}

/// Plain `{id, time, message}` mapping of a [`LogRecord`].
///
/// Serializes to exactly these three keys and rejects any other key on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlainRecord {
    pub id: String,
    pub time: i64,
    pub message: String,
}

impl From<&LogRecord> for PlainRecord {
    fn from(record: &LogRecord) -> Self {
        record.to_plain()
    }
}

/// Rebuilds a record from its plain form, keeping the original timestamp.
impl From<PlainRecord> for LogRecord {
    fn from(plain: PlainRecord) -> Self {
        Self {
            id: plain.id,
            time: plain.time,
            message: plain.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_stamps_time() {
        let before = Utc::now().timestamp_millis();
        let record = LogRecord::new("@first", "notice 1");
        let after = Utc::now().timestamp_millis();

        assert_eq!(record.id(), "@first");
        assert_eq!(record.message(), "notice 1");
        assert!(record.time() >= before && record.time() <= after);
    }

    #[test]
    fn test_clone_keeps_identical_values() {
        let record = LogRecord::new("@first", "notice 1");
        let copy = record.clone();

        assert_eq!(record, copy);
        assert_eq!(record.time(), copy.time());
    }

    #[test]
    fn test_plain_form_has_exactly_three_keys() {
        let record = LogRecord::new("@first", "notice 1");
        let value = serde_json::to_value(record.to_plain()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 3);
        assert_eq!(object["id"], "@first");
        assert_eq!(object["message"], "notice 1");
        assert_eq!(object["time"], record.time());
    }

    #[test]
    fn test_plain_form_rejects_extra_keys() {
        let json = r#"{"id":"@a","time":1,"message":"m","level":1}"#;
        assert!(serde_json::from_str::<PlainRecord>(json).is_err());
    }

    #[test]
    fn test_record_from_plain_keeps_timestamp() {
        let plain = PlainRecord {
            id: "@a".to_string(),
            time: 42,
            message: "m".to_string(),
        };
        let record = LogRecord::from(plain.clone());

        assert_eq!(record.time(), 42);
        assert_eq!(PlainRecord::from(&record), plain);
    }
}
