use {
    derive_more::Display,
    serde::Serialize,
    std::{collections::BTreeMap, io::Error as IoError},
};

/// Keys used in an [`ErrorSet`]. Field keys match the wire names; the last
/// two carry non-field errors.
pub mod key {
    pub const FULL_NAME: &str = "fullName";
    pub const PHONE: &str = "phone";
    pub const BOOK_AT: &str = "bookAt";
    pub const GUEST_SIZE: &str = "guestSize";
    pub const AUTHENTICATION: &str = "authentication";
    pub const API: &str = "api";
}

/// Failures raised while sending a booking. Each variant displays as the
/// underlying message, which is what gets published under the `api` key.
#[derive(Debug, Display)]
pub enum Error {
    #[display(fmt = "{}", _0)]
    Rejected(String),
    #[display(fmt = "{}", _0)]
    Http(reqwest::Error),
    #[display(fmt = "{}", _0)]
    Io(IoError),
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error)
    }
}

impl From<IoError> for Error {
    fn from(error: IoError) -> Self {
        Self::Io(error)
    }
}

/// Current validation and submission failures, one message per key. A field
/// without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorSet(BTreeMap<&'static str, String>);

impl ErrorSet {
    /// A set holding exactly one entry.
    pub fn single(key: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.insert(key, message);
        errors
    }

    pub fn insert(&mut self, key: &'static str, message: impl Into<String>) {
        self.0.insert(key, message.into());
    }

    /// Drop a single key, leaving the rest untouched.
    pub fn clear(&mut self, key: &str) {
        self.0.remove(key);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(key, message)| (*key, message.as_str()))
    }
}
