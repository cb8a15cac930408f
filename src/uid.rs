use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::identifiers::{StorageId, SystemId};
use crate::validation::ParseError;

/// Delimiter between the system id and each storage id.
pub(crate) const DELIMITER: char = '~';
/// Literal prefix carried by every token of the grouped encoding.
pub(crate) const GROUP_PREFIX: &str = "SID=";

/// Wire encoding of a raw host identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// `SYSTEM~S0~S1~...`: one system id followed by tilde-chained storage ids.
    Compact,
    /// `SID=SYSTEM~S0 SID=SYSTEM~S1 ...`: space-separated groups, one storage
    /// id per group, each group repeating the system id.
    Grouped,
}

/// A parsed composite host-machine identifier.
///
/// Holds one [`SystemId`], the [`StorageId`]s in encounter order (duplicates
/// and empty slots preserved), and the encoding the raw text arrived in.
/// Values are immutable once parsed; canonicalization, matching, and
/// rendering all operate read-only and cannot fail.
///
/// Serializes as the raw identifier string and deserializes through
/// [`HostMachineUid::parse`], so event payload structs can embed it directly.
///
/// # Example
///
/// ```rust
/// use host_machine_uid::HostMachineUid;
///
/// let uid = HostMachineUid::parse("P57TL8GGQI69~PG796169S564N489~GBFUL623C0UIG")?;
/// assert_eq!(uid.canonical(), "P57TL8GGQI69~GBFUL623C0UIG~PG796169S564N489");
/// # Ok::<(), host_machine_uid::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HostMachineUid {
    system_id: SystemId,
    storage_ids: Vec<StorageId>,
    source_encoding: Encoding,
}

impl HostMachineUid {
    /// Parses a raw identifier in either wire encoding.
    ///
    /// Input that contains a space, or begins with the `SID=` literal, is
    /// parsed as [`Encoding::Grouped`]; everything else as
    /// [`Encoding::Compact`]. A bare token with no delimiter at all cannot
    /// be told apart from a lone system id and is rejected rather than
    /// guessed.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        if raw.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        if raw.contains(' ') || raw.starts_with(GROUP_PREFIX) {
            Self::parse_grouped(raw)
        } else {
            Self::parse_compact(raw)
        }
    }

    /// The stable component of the identifier.
    pub fn system_id(&self) -> &SystemId {
        &self.system_id
    }

    /// Storage ids in encounter order, duplicates and empty slots preserved.
    pub fn storage_ids(&self) -> &[StorageId] {
        &self.storage_ids
    }

    /// The encoding the raw text arrived in.
    pub fn source_encoding(&self) -> Encoding {
        self.source_encoding
    }

    fn parse_compact(raw: &str) -> Result<Self, ParseError> {
        let Some((head, tail)) = raw.split_once(DELIMITER) else {
            return Err(ParseError::MalformedSegment {
                segment: raw.to_string(),
            });
        };
        let system_id = SystemId::parse(head)?;
        // A single trailing delimiter records zero storage ids; any other
        // tail keeps every segment, empty slots included.
        let storage_ids = if tail.is_empty() {
            Vec::new()
        } else {
            tail.split(DELIMITER)
                .map(|segment| {
                    Self::check_storage(segment, &system_id)?;
                    Ok(StorageId::new(segment.to_string()))
                })
                .collect::<Result<_, _>>()?
        };
        Ok(Self {
            system_id,
            storage_ids,
            source_encoding: Encoding::Compact,
        })
    }

    fn parse_grouped(raw: &str) -> Result<Self, ParseError> {
        let mut system_id: Option<SystemId> = None;
        let mut storage_ids = Vec::new();
        for token in raw.split_ascii_whitespace() {
            let Some(body) = token.strip_prefix(GROUP_PREFIX) else {
                return Err(ParseError::MalformedSegment {
                    segment: token.to_string(),
                });
            };
            let Some((head, storage)) = body.split_once(DELIMITER) else {
                return Err(ParseError::MalformedSegment {
                    segment: token.to_string(),
                });
            };
            // Exactly one delimiter per group.
            if storage.contains(DELIMITER) {
                return Err(ParseError::MalformedSegment {
                    segment: token.to_string(),
                });
            }
            let group_system = SystemId::parse(head)?;
            let system_id = system_id.get_or_insert(group_system.clone());
            if *system_id != group_system {
                return Err(ParseError::SystemIdMismatch {
                    expected: system_id.as_ref().to_string(),
                    found: group_system.as_ref().to_string(),
                });
            }
            Self::check_storage(storage, system_id)?;
            storage_ids.push(StorageId::new(storage.to_string()));
        }
        let Some(system_id) = system_id else {
            // Whitespace-only input yields no groups at all.
            return Err(ParseError::MalformedSegment {
                segment: raw.to_string(),
            });
        };
        Ok(Self {
            system_id,
            storage_ids,
            source_encoding: Encoding::Grouped,
        })
    }

    fn check_storage(segment: &str, system_id: &SystemId) -> Result<(), ParseError> {
        if segment == system_id.as_ref() {
            return Err(ParseError::StorageEqualsSystem {
                value: segment.to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for HostMachineUid {
    /// Reproduces the raw identifier text exactly, in its source encoding.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

impl FromStr for HostMachineUid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HostMachineUid {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HostMachineUid> for String {
    fn from(uid: HostMachineUid) -> Self {
        uid.to_string()
    }
}
