//! Transformation method names.
//!
//! A [`Method`] names an entry in the
//! [`TransformationRegistry`](crate::TransformationRegistry). The built-in
//! methods are [`CPI`], [`WAGE`] and [`GOLD`]; anything else is a custom
//! registration, conventionally spelled `CUSTOM:<NAME>`.
//!
//! ```
//! use timebucks_core::Method;
//!
//! let cpi = Method::cpi();
//! assert_eq!(cpi, "CPI");
//! assert!(cpi.is_builtin());
//!
//! let rent = Method::new("CUSTOM:RENT");
//! assert!(!rent.is_builtin());
//! assert!(rent.is_notation_safe());
//! ```

use std::borrow::Borrow;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Consumer price index method name.
pub const CPI: &str = "CPI";
/// Average wage index method name.
pub const WAGE: &str = "WAGE";
/// Gold price method name.
pub const GOLD: &str = "GOLD";

/// The name of a transformation method.
///
/// Cheap to clone; compares and hashes like the underlying string so that a
/// registry keyed by `Method` can be queried with a plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Method(Arc<str>);

impl Method {
    /// Create a method name. No validation is applied.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// The consumer price index method.
    #[must_use]
    pub fn cpi() -> Self {
        Self::new(CPI)
    }

    /// The average wage index method.
    #[must_use]
    pub fn wage() -> Self {
        Self::new(WAGE)
    }

    /// The gold price method.
    #[must_use]
    pub fn gold() -> Self {
        Self::new(GOLD)
    }

    /// Get the string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is one of the three built-in methods.
    pub fn is_builtin(&self) -> bool {
        matches!(self.as_str(), CPI | WAGE | GOLD)
    }

    /// Whether the name can be written in notation: uppercase letters,
    /// optionally followed by `:` and uppercase letters or digits.
    pub fn is_notation_safe(&self) -> bool {
        let (head, tail) = match self.0.split_once(':') {
            Some((head, tail)) => (head, Some(tail)),
            None => (self.as_str(), None),
        };
        let head_ok = !head.is_empty() && head.bytes().all(|b| b.is_ascii_uppercase());
        let tail_ok = tail.map_or(true, |t| {
            !t.is_empty()
                && t
                    .bytes()
                    .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        });
        head_ok && tail_ok
    }
}

impl Serialize for Method {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Method {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(s))
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for Method {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Method {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for Method {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&str> for Method {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Method {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&Self> for Method {
    fn from(m: &Self) -> Self {
        m.clone()
    }
}

impl PartialEq<str> for Method {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Method {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl PartialEq<String> for Method {
    fn eq(&self, other: &String) -> bool {
        &*self.0 == other.as_str()
    }
}
