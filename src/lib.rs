//! Composite host-machine identity primitives for desktop license telemetry.
//!
//! A licensed desktop application identifies its host with one stable
//! "system" token and zero or more "storage" tokens, one per drive visible
//! when the identifier was captured. Drives come and go between captures,
//! so two raw identifiers for the same machine are rarely byte-identical.
//! This crate turns raw identifier text into an immutable [`HostMachineUid`]
//! and answers the three questions downstream event builders ask of it:
//!
//! - a stable, order-independent canonical form for comparison and display;
//! - whether two captures plausibly denote the same physical machine;
//! - a rendering in either wire encoding, optionally capped to fit a
//!   fixed-width log or index field.
//!
//! Every operation is a pure function of its inputs; all failures are
//! reported during parsing and none of the downstream operations can fail.
//!
#![deny(missing_docs)]

/// Canonical (sorted, deduplicated) rendering of parsed identifiers.
pub mod canonical;
/// System and storage identifier newtypes.
pub mod identifiers;
/// Same-machine equivalence over partial storage evidence.
pub mod matcher;
/// Length-bounded rendering in either wire encoding.
pub mod render;
/// The parsed identifier value and raw-text parsing for both encodings.
pub mod uid;
/// Validation failures raised while parsing raw identifiers.
pub mod validation;

pub use identifiers::{StorageId, SystemId};
pub use uid::{Encoding, HostMachineUid};
pub use validation::ParseError;
