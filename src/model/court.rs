//! Fixed list of courts offered for radar jurisdictions.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Court {
    pub id: &'static str,
    pub name: &'static str,
}

pub const COURTS: &[Court] = &[
    Court { id: "sc", name: "Supreme Court" },
    Court { id: "hc-delhi", name: "Delhi High Court" },
    Court { id: "hc-bombay", name: "Bombay High Court" },
    Court { id: "hc-madras", name: "Madras High Court" },
    Court { id: "hc-calcutta", name: "Calcutta High Court" },
    Court { id: "hc-karnataka", name: "Karnataka High Court" },
    Court { id: "hc-allahabad", name: "Allahabad High Court" },
    Court { id: "hc-kerala", name: "Kerala High Court" },
    Court { id: "nclat", name: "National Company Law Appellate Tribunal" },
    Court { id: "ngt", name: "National Green Tribunal" },
];

#[must_use]
pub fn court_by_id(id: &str) -> Option<&'static Court> {
    COURTS.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_court_ids_unique() {
        let ids: HashSet<_> = COURTS.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), COURTS.len());
    }

    #[test]
    fn test_court_lookup() {
        assert_eq!(court_by_id("sc").map(|c| c.name), Some("Supreme Court"));
        assert!(court_by_id("missing").is_none());
    }
}
