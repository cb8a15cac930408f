use std::collections::BTreeSet;

use crate::uid::HostMachineUid;

impl HostMachineUid {
    /// True when the two identifiers plausibly denote one physical machine.
    ///
    /// Different system ids are different machines, unconditionally. With the
    /// system ids equal, the deduplicated storage sets are compared: a match
    /// requires either set to be empty, or the two to overlap. A capture that
    /// enumerated no drives must not block recognition of the same machine's
    /// other captures, and a single shared drive is enough evidence to
    /// tolerate churn in the rest.
    ///
    /// Symmetric, and reflexive for every successfully parsed value.
    pub fn matches(&self, other: &Self) -> bool {
        if self.system_id() != other.system_id() {
            return false;
        }
        let ours: BTreeSet<&str> = self.storage_ids().iter().map(AsRef::as_ref).collect();
        let theirs: BTreeSet<&str> = other.storage_ids().iter().map(AsRef::as_ref).collect();
        ours.is_empty() || theirs.is_empty() || !ours.is_disjoint(&theirs)
    }
}
