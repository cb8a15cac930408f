use std::collections::BTreeSet;

use crate::uid::{HostMachineUid, DELIMITER};

impl HostMachineUid {
    /// Canonical textual form: the system id followed by the deduplicated
    /// storage ids in ascending byte order, tilde-joined in compact shape
    /// regardless of the source encoding.
    ///
    /// Two identifiers with the same system id and the same *set* of storage
    /// ids canonicalize identically, whatever order, duplication, or encoding
    /// the raw captures used. An identifier with no storage ids renders as
    /// `SYSTEM~` so the canonical form stays parseable.
    pub fn canonical(&self) -> String {
        let unique: BTreeSet<&str> = self.storage_ids().iter().map(AsRef::as_ref).collect();
        let mut out = String::from(self.system_id().as_ref());
        if unique.is_empty() {
            out.push(DELIMITER);
            return out;
        }
        for storage_id in unique {
            out.push(DELIMITER);
            out.push_str(storage_id);
        }
        out
    }
}
