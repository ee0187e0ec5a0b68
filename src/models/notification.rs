use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotificationStatusError {
    #[error("Invalid notification status: {0}")]
    InvalidStatus(String),
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Read,
    Unread,
}

impl fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status_str = match self {
            NotificationStatus::Read => "read",
            NotificationStatus::Unread => "unread",
        };
        write!(f, "{status_str}")
    }
}

impl FromStr for NotificationStatus {
    type Err = NotificationStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "read" => Ok(NotificationStatus::Read),
            "unread" => Ok(NotificationStatus::Unread),
            other => Err(NotificationStatusError::InvalidStatus(other.to_string())),
        }
    }
}

/// Created only as a side effect of an order mutation; clients can only
/// flip `status` afterwards.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub status: NotificationStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!(
            "Unread".parse::<NotificationStatus>().unwrap(),
            NotificationStatus::Unread
        );
        assert_eq!(
            "READ".parse::<NotificationStatus>().unwrap(),
            NotificationStatus::Read
        );
        assert!("archived".parse::<NotificationStatus>().is_err());
    }
}
