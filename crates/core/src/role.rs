//! Actor roles.
//!
//! The backend groups users as `administrador`, `maestro` and `alumno`, and
//! the login endpoint has been observed abbreviating the first to `admin`.
//! Parsing accepts all of those spellings; the canonical names emitted by
//! [`Role::as_str`] are the English snake_case ones.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Role of an authenticated actor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Administrator,
    Teacher,
    Student,
}

impl Role {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::Teacher => "teacher",
            Role::Student => "student",
        }
    }

    /// Lenient parse used on wire values; `None` for anything unrecognized.
    pub fn parse_lenient(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "administrator" | "administrador" | "admin" => Some(Role::Administrator),
            "teacher" | "maestro" => Some(Role::Teacher),
            "student" | "alumno" => Some(Role::Student),
            _ => None,
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse_lenient(s)
            .ok_or_else(|| DomainError::validation(format!("unknown role: {s:?}")))
    }
}

impl Serialize for Role {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Role::parse_lenient(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown role: {raw:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_backend_spellings() {
        assert_eq!(Role::parse_lenient("administrador"), Some(Role::Administrator));
        assert_eq!(Role::parse_lenient("admin"), Some(Role::Administrator));
        assert_eq!(Role::parse_lenient("MAESTRO"), Some(Role::Teacher));
        assert_eq!(Role::parse_lenient("alumno"), Some(Role::Student));
        assert_eq!(Role::parse_lenient("student"), Some(Role::Student));
        assert_eq!(Role::parse_lenient("guest"), None);
    }

    #[test]
    fn canonical_names_round_trip() {
        for role in [Role::Administrator, Role::Teacher, Role::Student] {
            let parsed: Role = role.as_str().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn serde_uses_canonical_names() {
        let json = serde_json::to_string(&Role::Teacher).unwrap();
        assert_eq!(json, "\"teacher\"");
        let back: Role = serde_json::from_str("\"maestro\"").unwrap();
        assert_eq!(back, Role::Teacher);
    }
}
