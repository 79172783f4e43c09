//! Pure queries over the loaded collection: search, tab filter, stats.

use veil_types::MembershipRecord;

/// The tier tabs shown above the collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MembershipTab {
    #[default]
    All,
    Level1,
    Level2,
    Level3,
}

impl MembershipTab {
    /// The encrypted-level tag this tab selects, `None` for `All`.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            MembershipTab::All => None,
            MembershipTab::Level1 => Some("FHE-L1"),
            MembershipTab::Level2 => Some("FHE-L2"),
            MembershipTab::Level3 => Some("FHE-L3"),
        }
    }

    /// Parse a tab selector key ("all", "level1", "level2", "level3").
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "all" => Some(MembershipTab::All),
            "level1" => Some(MembershipTab::Level1),
            "level2" => Some(MembershipTab::Level2),
            "level3" => Some(MembershipTab::Level3),
            _ => None,
        }
    }

    fn matches(&self, record: &MembershipRecord) -> bool {
        match self.tag() {
            None => true,
            Some(tag) => record.encrypted_level == tag,
        }
    }
}

/// Filter the collection by search term and tab.
///
/// The search term matches case-insensitively as a substring of either
/// the id or the owner; the tab predicate is ANDed on top. Pure — safe
/// to call on every keystroke.
pub fn filter_memberships<'a>(
    records: &'a [MembershipRecord],
    search_term: &str,
    tab: MembershipTab,
) -> Vec<&'a MembershipRecord> {
    let needle = search_term.to_lowercase();
    records
        .iter()
        .filter(|record| {
            let matches_search = record.id.as_str().to_lowercase().contains(&needle)
                || record.owner.as_str().to_lowercase().contains(&needle);
            matches_search && tab.matches(record)
        })
        .collect()
}

/// Collection statistics: total plus per-tier counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TierStats {
    pub total: usize,
    pub level1: usize,
    pub level2: usize,
    pub level3: usize,
}

/// Count memberships per tier tag.
pub fn tier_stats(records: &[MembershipRecord]) -> TierStats {
    let count = |tab: MembershipTab| {
        records
            .iter()
            .filter(|r| tab.tag() == Some(r.encrypted_level.as_str()))
            .count()
    };
    TierStats {
        total: records.len(),
        level1: count(MembershipTab::Level1),
        level2: count(MembershipTab::Level2),
        level3: count(MembershipTab::Level3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veil_types::{AccountAddress, MembershipId, Timestamp};

    fn record(id: &str, owner: &str, level: &str) -> MembershipRecord {
        MembershipRecord {
            id: MembershipId::new(id),
            encrypted_level: level.to_string(),
            owner: AccountAddress::new(owner),
            join_date: Timestamp::new(1_700_000_000),
            benefits: vec![],
            proof: String::new(),
        }
    }

    fn fixtures() -> Vec<MembershipRecord> {
        vec![
            record("MEM-1", "0xAA", "FHE-L1"),
            record("MEM-2", "0xBB", "FHE-L3"),
        ]
    }

    #[test]
    fn test_search_matches_owner_case_insensitively() {
        let records = fixtures();
        let hits = filter_memberships(&records, "aa", MembershipTab::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "MEM-1");
    }

    #[test]
    fn test_search_matches_id() {
        let records = fixtures();
        let hits = filter_memberships(&records, "mem-2", MembershipTab::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "MEM-2");
    }

    #[test]
    fn test_tab_selects_by_level() {
        let records = fixtures();
        let hits = filter_memberships(&records, "", MembershipTab::Level3);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "MEM-2");
    }

    #[test]
    fn test_search_and_tab_are_anded() {
        let records = fixtures();
        assert!(filter_memberships(&records, "aa", MembershipTab::Level3).is_empty());
    }

    #[test]
    fn test_empty_search_matches_all() {
        let records = fixtures();
        assert_eq!(filter_memberships(&records, "", MembershipTab::All).len(), 2);
    }

    #[test]
    fn test_tab_keys() {
        assert_eq!(MembershipTab::from_key("all"), Some(MembershipTab::All));
        assert_eq!(MembershipTab::from_key("level3"), Some(MembershipTab::Level3));
        assert_eq!(MembershipTab::from_key("gold"), None);
    }

    #[test]
    fn test_tier_stats() {
        let records = vec![
            record("MEM-1", "0xAA", "FHE-L1"),
            record("MEM-2", "0xBB", "FHE-L1"),
            record("MEM-3", "0xCC", "FHE-L3"),
            record("MEM-4", "0xDD", "something-else"),
        ];
        let stats = tier_stats(&records);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.level1, 2);
        assert_eq!(stats.level2, 0);
        assert_eq!(stats.level3, 1);
    }
}
