use crate::uid::{Encoding, HostMachineUid, DELIMITER, GROUP_PREFIX};

impl HostMachineUid {
    /// Renders the identifier in its source encoding, optionally bounded.
    ///
    /// With no bound this reproduces the raw input exactly, storage order,
    /// duplicates, and empty slots included.
    pub fn render(&self, max_len: Option<usize>) -> String {
        self.render_as(self.source_encoding(), max_len)
    }

    /// Renders the identifier in the requested encoding, greedily bounded.
    ///
    /// The first unit (system id with the first storage id, or the first
    /// group) is always emitted, even when it alone exceeds `max_len`.
    /// Each further storage id is appended only while the cumulative byte
    /// length stays within the bound; the first unit that would overflow
    /// stops the rendering, preserving storage order.
    pub fn render_as(&self, encoding: Encoding, max_len: Option<usize>) -> String {
        let mut out = String::new();
        for (index, unit) in self.units(encoding).enumerate() {
            if index > 0 {
                if let Some(max) = max_len {
                    if out.len() + unit.len() > max {
                        break;
                    }
                }
            }
            out.push_str(&unit);
        }
        out
    }

    /// Appendable units of the rendered form; the first unit carries the
    /// system id along with the first storage id (or an empty slot).
    fn units(&self, encoding: Encoding) -> impl Iterator<Item = String> + '_ {
        let system = self.system_id().as_ref();
        let first_storage = self.storage_ids().first().map(AsRef::as_ref).unwrap_or("");
        let first = match encoding {
            Encoding::Compact => format!("{system}{DELIMITER}{first_storage}"),
            Encoding::Grouped => format!("{GROUP_PREFIX}{system}{DELIMITER}{first_storage}"),
        };
        let rest = self
            .storage_ids()
            .iter()
            .skip(1)
            .map(move |storage_id| match encoding {
                Encoding::Compact => format!("{DELIMITER}{}", storage_id.as_ref()),
                Encoding::Grouped => {
                    format!(" {GROUP_PREFIX}{system}{DELIMITER}{}", storage_id.as_ref())
                }
            });
        std::iter::once(first).chain(rest)
    }
}
