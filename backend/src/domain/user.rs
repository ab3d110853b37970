//! User account and health profile model.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors raised by the user value types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    InvalidId,
    EmptyName,
    InvalidEmail,
    PasswordTooShort { min: usize },
    UnknownActivityLevel { value: String },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::InvalidEmail => write!(f, "email address is not valid"),
            Self::PasswordTooShort { min } => {
                write!(f, "password must be at least {min} characters")
            }
            Self::UnknownActivityLevel { value } => write!(
                f,
                "unknown activity level '{value}'; expected one of {}",
                ActivityLevel::ALL
                    .iter()
                    .map(|level| level.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier.
///
/// # Examples
/// ```
/// use annapurna::domain::UserId;
///
/// let id = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").unwrap();
/// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
/// assert!(UserId::new("not-a-uuid").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Parse a user id from its textual form.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.trim() != raw {
            return Err(UserValidationError::InvalidId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Generate a new random id.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Normalised (trimmed, lower-case) email address used as the login key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

impl Email {
    /// Normalise and validate an email address.
    ///
    /// # Examples
    /// ```
    /// use annapurna::domain::Email;
    ///
    /// let email = Email::new("  Asha@Example.COM ").unwrap();
    /// assert_eq!(email.as_ref(), "asha@example.com");
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let normalised = raw.as_ref().trim().to_lowercase();
        if !email_regex().is_match(&normalised) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(normalised))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Self-reported daily activity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// Every level, in increasing order of activity.
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Wire representation of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very-active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| UserValidationError::UnknownActivityLevel {
                value: s.to_owned(),
            })
    }
}

/// Optional health attributes maintained through profile updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HealthProfile {
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub activity_level: Option<ActivityLevel>,
    pub diseases: Vec<String>,
}

/// Partial update applied to a [`HealthProfile`].
///
/// `None` leaves the stored value untouched; `diseases` replaces the whole
/// list when present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub activity_level: Option<ActivityLevel>,
    pub diseases: Option<Vec<String>>,
}

impl ProfileUpdate {
    /// True when no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.height.is_none()
            && self.weight.is_none()
            && self.activity_level.is_none()
            && self.diseases.is_none()
    }
}

impl HealthProfile {
    /// Apply a partial update in place.
    pub fn apply(&mut self, update: ProfileUpdate) {
        let ProfileUpdate {
            height,
            weight,
            activity_level,
            diseases,
        } = update;
        if height.is_some() {
            self.height = height;
        }
        if weight.is_some() {
            self.weight = weight;
        }
        if activity_level.is_some() {
            self.activity_level = activity_level;
        }
        if let Some(diseases) = diseases {
            self.diseases = diseases;
        }
    }
}

/// Registered user.
///
/// The password hash is an opaque PHC string produced by the configured
/// [`crate::domain::ports::PasswordHasher`]; it never leaves the server.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub password_hash: String,
    pub age: u32,
    pub gender: String,
    pub profile: HealthProfile,
    pub created_at: DateTime<Utc>,
}

/// Minimum accepted password length at signup.
pub const PASSWORD_MIN_LEN: usize = 6;

/// Validated signup input, before the password is hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    name: String,
    email: Email,
    password: String,
    age: u32,
    gender: String,
}

impl SignupRequest {
    /// Validate raw signup fields.
    pub fn try_new(
        name: impl Into<String>,
        email: impl AsRef<str>,
        password: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        let email = Email::new(email)?;
        let password = password.into();
        if password.chars().count() < PASSWORD_MIN_LEN {
            return Err(UserValidationError::PasswordTooShort {
                min: PASSWORD_MIN_LEN,
            });
        }
        Ok(Self {
            name,
            email,
            password,
            age,
            gender: gender.into().trim().to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }
}
