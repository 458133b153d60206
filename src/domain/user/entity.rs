//! User entity and related types

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Store-generated user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Parse an id taken from a request path.
    ///
    /// Returns `None` for anything that is not a decimal integer; callers treat
    /// that as "no such user" rather than a malformed request.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<i64>().ok().map(Self)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Any JSON number; no range is enforced.
///
/// Integral values serialize as JSON integers so `30` round-trips as `30`
/// whichever backend stored it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Age(f64);

// Largest magnitude below which every integer is exactly representable in f64
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

impl Age {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Serialize for Age {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 && self.0.abs() < MAX_EXACT_INTEGER {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Age {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self)
    }
}

/// One row of the `users` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub age: Option<Age>,
}

/// Values for an INSERT; the store assigns the id
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: Option<Age>,
}

/// Columns to overwrite on UPDATE. `None` leaves the column untouched;
/// `age: Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<Option<Age>>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none()
    }

    /// Apply the changes to an in-memory copy of a row
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }

        if let Some(email) = &self.email {
            user.email = email.clone();
        }

        if let Some(age) = self.age {
            user.age = age;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: UserId::new(1),
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            age: Some(Age::new(30.0)),
        }
    }

    #[test]
    fn test_user_id_parse() {
        assert_eq!(UserId::parse("42"), Some(UserId::new(42)));
        assert_eq!(UserId::parse("-3"), Some(UserId::new(-3)));
        assert_eq!(UserId::parse("abc"), None);
        assert_eq!(UserId::parse("1abc"), None);
        assert_eq!(UserId::parse(""), None);
    }

    #[test]
    fn test_user_serialization_keeps_null_age() {
        let user = User {
            age: None,
            ..sample_user()
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Ann", "email": "ann@example.com", "age": null})
        );
    }

    #[test]
    fn test_age_keeps_fractional_values() {
        let age: Age = serde_json::from_str("30.5").unwrap();

        assert_eq!(age, Age::new(30.5));
        assert_eq!(serde_json::to_string(&age).unwrap(), "30.5");
    }

    #[test]
    fn test_integral_age_serializes_as_integer() {
        let from_int: Age = serde_json::from_str("30").unwrap();
        let from_float: Age = serde_json::from_str("30.0").unwrap();

        assert_eq!(serde_json::to_value(from_int).unwrap(), serde_json::json!(30));
        assert_eq!(serde_json::to_value(from_float).unwrap(), serde_json::json!(30));
        assert_eq!(serde_json::to_value(Age::new(-2.0)).unwrap(), serde_json::json!(-2));
    }

    #[test]
    fn test_age_rejects_non_numbers() {
        assert!(serde_json::from_str::<Age>("\"30\"").is_err());
    }

    #[test]
    fn test_changes_apply_only_present_fields() {
        let mut user = sample_user();
        let changes = UserChanges {
            email: Some("ann@new.org".to_string()),
            ..Default::default()
        };

        changes.apply_to(&mut user);

        assert_eq!(user.name, "Ann");
        assert_eq!(user.email, "ann@new.org");
        assert_eq!(user.age, Some(Age::new(30.0)));
    }

    #[test]
    fn test_changes_can_clear_age() {
        let mut user = sample_user();
        let changes = UserChanges {
            age: Some(None),
            ..Default::default()
        };

        assert!(!changes.is_empty());
        changes.apply_to(&mut user);
        assert_eq!(user.age, None);
    }

    #[test]
    fn test_empty_changes() {
        assert!(UserChanges::default().is_empty());
    }
}
