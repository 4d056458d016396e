//! Member identifiers of the form `<Kind>:<Name>`, e.g. `M:System.String.Trim`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use thiserror::Error;

/// The kind of program element a [`MemberId`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Namespace,
    Type,
    Field,
    Property,
    Method,
    Event,
}

impl MemberKind {
    /// The single-letter prefix used in member ids.
    pub fn prefix(self) -> char {
        match self {
            MemberKind::Namespace => 'N',
            MemberKind::Type => 'T',
            MemberKind::Field => 'F',
            MemberKind::Property => 'P',
            MemberKind::Method => 'M',
            MemberKind::Event => 'E',
        }
    }

    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix {
            'N' => Some(MemberKind::Namespace),
            'T' => Some(MemberKind::Type),
            'F' => Some(MemberKind::Field),
            'P' => Some(MemberKind::Property),
            'M' => Some(MemberKind::Method),
            'E' => Some(MemberKind::Event),
            _ => None,
        }
    }
}

/// A parsed member id. The raw string is kept verbatim; the name is a view
/// into it past the two-character prefix.
#[derive(Debug, Clone, Eq)]
pub struct MemberId {
    kind: MemberKind,
    raw: String,
}

/// Returned when a string is not a valid `<Kind>:<Name>` member id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a member id")]
pub struct InvalidMemberId(pub String);

impl MemberId {
    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    /// The id without its kind prefix, e.g. `System.String.Trim`.
    pub fn name(&self) -> &str {
        &self.raw[2..]
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for MemberId {
    type Err = InvalidMemberId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let kind = chars.next().and_then(MemberKind::from_prefix);
        match (kind, chars.next()) {
            (Some(kind), Some(':')) if s.len() > 2 && !s[2..].trim().is_empty() => Ok(MemberId {
                kind,
                raw: s.to_string(),
            }),
            _ => Err(InvalidMemberId(s.to_string())),
        }
    }
}

impl PartialEq for MemberId {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Hash for MemberId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
