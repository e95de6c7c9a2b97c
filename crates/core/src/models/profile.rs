use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AvailabilityError;
use crate::models::SlotCandidate;

/// Which side of the tutoring marketplace a profile belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileRole {
    Tutor,
    Student,
}

impl ProfileRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileRole::Tutor => "tutor",
            ProfileRole::Student => "student",
        }
    }
}

impl fmt::Display for ProfileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileRole {
    type Err = AvailabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tutor" => Ok(ProfileRole::Tutor),
            "student" => Ok(ProfileRole::Student),
            other => Err(AvailabilityError::Validation(format!(
                "Unrecognized profile role: {other}"
            ))),
        }
    }
}

/// A tutor or student profile; the owner of one availability collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub display_name: String,
    pub role: ProfileRole,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfileRequest {
    pub display_name: String,
    pub role: ProfileRole,
    #[serde(default)]
    pub slots: Vec<SlotCandidate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfileResponse {
    pub id: Uuid,
    pub display_name: String,
    pub role: ProfileRole,
    pub created_at: DateTime<Utc>,
    pub slot_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetProfileResponse {
    pub id: Uuid,
    pub display_name: String,
    pub role: ProfileRole,
    pub created_at: DateTime<Utc>,
    pub slot_count: usize,
}
