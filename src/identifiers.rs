use crate::validation::ParseError;
use regex::Regex;
use serde::{Deserialize, Serialize};

macro_rules! token_newtype {
    ($name:ident, $doc:expr, $pattern:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new instance without validation; callers are responsible for conformity.
            pub fn new(value: String) -> Self {
                Self(value)
            }

            /// Parses a validated token from a string.
            pub fn parse(value: impl Into<String>) -> Result<Self, ParseError> {
                let s = value.into();
                if !Regex::new($pattern).expect("invalid regex").is_match(&s) {
                    return Err(ParseError::MalformedSegment { segment: s });
                }
                Ok(Self(s))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

token_newtype!(
    SystemId,
    "The stable component of a host identifier, constant across observations \
     of one machine (non-empty, delimiter-free).",
    r"^[^~]+$"
);
token_newtype!(
    StorageId,
    "Identifier for one drive visible at capture time. May be empty: an \
     explicitly recorded slot with no storage id is legitimate evidence.",
    r"^[^~]*$"
);

impl StorageId {
    /// True for an explicitly recorded empty slot.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
