//! Logged contact records as read from an ADIF log.

use hashbrown::HashMap;

/// Field holding the contact start time, `HHMM` or `HHMMSS`.
pub const FIELD_TIME_ON: &str = "TIME_ON";
/// Field holding the worked station's callsign.
pub const FIELD_CALL: &str = "CALL";
/// Field holding the received serial number.
pub const FIELD_SRX: &str = "SRX";

/// One logged contact, stored as upper-cased field name to value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactRecord {
    fields: HashMap<String, String>,
}

impl ContactRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from `(name, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut rec = Self::new();
        for (k, v) in pairs {
            rec.set(k.as_ref(), v);
        }
        rec
    }

    /// Sets `name` to `value`, replacing any previous value.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_ascii_uppercase(), value.into());
    }

    /// Returns the field value, or `""` when absent.
    pub fn field(&self, name: &str) -> &str {
        self.fields
            .get(name.to_ascii_uppercase().as_str())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Returns the number of fields present.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true when the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// First four characters of `TIME_ON`.
    pub fn time_on_hhmm(&self) -> &str {
        let t = self.field(FIELD_TIME_ON);
        match t.char_indices().nth(4) {
            Some((end, _)) => &t[..end],
            None => t,
        }
    }

    /// Worked callsign.
    pub fn call(&self) -> &str {
        self.field(FIELD_CALL)
    }

    /// Received serial.
    pub fn srx(&self) -> &str {
        self.field(FIELD_SRX)
    }
}
