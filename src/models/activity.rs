use std::fmt;

use serde::{Deserialize, Serialize};

/// Key of an activity in the directory. Compared byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityName(String);

impl ActivityName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActivityName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// No format validation: any string the caller sends is a student identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentEmail(String);

impl StudentEmail {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StudentEmail {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One extracurricular offering. `max_participants` is advisory only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<StudentEmail>,
}

impl Activity {
    pub fn is_signed_up(&self, email: &StudentEmail) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn participants_count(&self) -> usize {
        self.participants.len()
    }
}
