//! Record ID - prefixed string identifier for stored records
//!
//! Format: `<prefix>_<timestamp base36><6 hex chars>`, e.g. `p_m1x2y3a1b2c3`.
//! The prefix encodes the record kind, so an id is self-describing in the
//! persisted JSON and in log output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

/// The kind of record an id refers to, encoded as the id prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    User,
    Post,
    Comment,
    Group,
    Checkin,
    Repost,
}

impl RecordKind {
    /// Prefix used in the string form of ids of this kind.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::User => "u",
            Self::Post => "p",
            Self::Comment => "c",
            Self::Group => "g",
            Self::Checkin => "ch",
            Self::Repost => "r",
        }
    }

    /// Resolve a prefix back to a kind.
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "u" => Some(Self::User),
            "p" => Some(Self::Post),
            "c" => Some(Self::Comment),
            "g" => Some(Self::Group),
            "ch" => Some(Self::Checkin),
            "r" => Some(Self::Repost),
            _ => None,
        }
    }
}

/// Opaque record identifier.
///
/// Stored and serialized as a plain string so persisted JSON stays readable
/// and compatible with ids minted by earlier versions of the data set
/// (e.g. the seeded `u_admin` account).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap an existing id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the id, returning the inner string.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Check whether the id is empty (uninitialized).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The kind encoded in the id prefix, if it carries a known one.
    #[must_use]
    pub fn kind(&self) -> Option<RecordKind> {
        let prefix = self.0.split('_').next()?;
        RecordKind::from_prefix(prefix)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Thread-safe id generator.
///
/// Encodes the millisecond timestamp and a 12-bit atomic sequence in base36,
/// followed by a random hex suffix. Within one process, ids stay unique up
/// to 4096 per millisecond; the suffix guards across processes.
#[derive(Debug)]
pub struct RecordIdGenerator {
    sequence: AtomicU64,
}

impl RecordIdGenerator {
    /// Create a new generator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sequence: AtomicU64::new(0),
        }
    }

    /// Mint a fresh id of the given kind.
    pub fn generate(&self, kind: RecordKind) -> RecordId {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed) & 0xFFF;
        let entropy: u16 = rand::thread_rng().gen();
        RecordId(format!(
            "{}_{}{:04x}",
            kind.prefix(),
            to_base36((millis << 12) | seq),
            entropy
        ))
    }
}

impl Default for RecordIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while value > 0 {
        buf.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    buf.reverse();
    String::from_utf8(buf).expect("base36 digits are ASCII")
}
