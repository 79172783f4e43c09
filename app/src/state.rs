//! The application state container.

use crate::filter::{filter_memberships, tier_stats, MembershipTab, TierStats};
use veil_types::{AccountAddress, MembershipRecord};

/// Mutable UI-facing state, mutated only through the named operations
/// below.
///
/// The membership collection is a disposable cache of remote truth: it is
/// fully replaced by `replace_memberships`, never patched, and a failed
/// reload leaves it untouched.
#[derive(Debug, Default)]
pub struct AppState {
    account: Option<AccountAddress>,
    memberships: Vec<MembershipRecord>,
    search_term: String,
    active_tab: MembershipTab,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The connected account, if any.
    pub fn account(&self) -> Option<&AccountAddress> {
        self.account.as_ref()
    }

    /// The full loaded collection, in mint order.
    pub fn memberships(&self) -> &[MembershipRecord] {
        &self.memberships
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn active_tab(&self) -> MembershipTab {
        self.active_tab
    }

    /// Record a newly connected (or switched) account.
    pub fn set_account(&mut self, account: AccountAddress) {
        self.account = Some(account);
    }

    /// Drop the account. The loaded collection stays visible — it is
    /// public data, not tied to the session.
    pub fn disconnect(&mut self) {
        self.account = None;
    }

    /// Replace the whole collection with freshly loaded remote truth.
    pub fn replace_memberships(&mut self, memberships: Vec<MembershipRecord>) {
        self.memberships = memberships;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_tab(&mut self, tab: MembershipTab) {
        self.active_tab = tab;
    }

    /// The subset currently visible under the search term and active tab.
    pub fn visible(&self) -> Vec<&MembershipRecord> {
        filter_memberships(&self.memberships, &self.search_term, self.active_tab)
    }

    /// Per-tier counts over the full collection (not the visible subset).
    pub fn stats(&self) -> TierStats {
        tier_stats(&self.memberships)
    }
}
