//! State slice for the approval inbox pages.
//!
//! Selection carries a generation counter: every `select` bumps it, and a
//! resolution presenting a stale generation is discarded. Re-selecting while
//! an earlier detail fetch is in flight can therefore never leave the page
//! showing a mix of two records.

use crate::models::inbox::{ApprovalAction, InboxItem};
use crate::store::fetch::Fetch;

#[derive(Debug)]
pub struct ApprovalSlice<D> {
    pub inbox: Fetch<Vec<InboxItem>>,
    pub selected: Option<String>,
    pub detail: Fetch<D>,
    pub actions: Vec<ApprovalAction>,
    generation: u64,
}

impl<D> Default for ApprovalSlice<D> {
    fn default() -> Self {
        ApprovalSlice {
            inbox: Fetch::Idle,
            selected: None,
            detail: Fetch::Idle,
            actions: Vec::new(),
            generation: 0,
        }
    }
}

impl<D> ApprovalSlice<D> {
    pub fn inbox_loading(&mut self) {
        self.inbox = Fetch::Loading;
    }

    pub fn inbox_loaded(&mut self, items: Vec<InboxItem>) {
        self.inbox = Fetch::Ready(items);
    }

    pub fn inbox_failed(&mut self, error: String) {
        self.inbox = Fetch::Failed(error);
    }

    pub fn items(&self) -> &[InboxItem] {
        self.inbox.ready().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn selected_item(&self) -> Option<&InboxItem> {
        let refno = self.selected.as_deref()?;
        self.items().iter().find(|i| i.refno == refno)
    }

    /// Begin a new selection. Returns the generation the caller must present
    /// when resolving the fetch.
    pub fn select(&mut self, refno: &str) -> u64 {
        self.generation += 1;
        self.selected = Some(refno.to_string());
        self.detail = Fetch::Loading;
        self.actions.clear();
        self.generation
    }

    /// Apply a resolved detail fetch. Returns false, leaving state untouched,
    /// when a later selection has superseded this one.
    pub fn detail_resolved(
        &mut self,
        generation: u64,
        detail: D,
        actions: Vec<ApprovalAction>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        self.detail = Fetch::Ready(detail);
        self.actions = actions;
        true
    }

    pub fn detail_failed(&mut self, generation: u64, error: String) -> bool {
        if generation != self.generation {
            return false;
        }
        self.detail = Fetch::Failed(error);
        self.actions.clear();
        true
    }

    /// Drop the selection, e.g. after a successful submission.
    pub fn clear_selection(&mut self) {
        self.generation += 1;
        self.selected = None;
        self.detail = Fetch::Idle;
        self.actions.clear();
    }
}

/// Synchronous submit preconditions, checked before any network call.
pub fn validate_submission(
    has_selection: bool,
    comment: &str,
    needs_verified: bool,
    verified: bool,
) -> Result<(), String> {
    if !has_selection {
        return Err("Select a record before submitting".into());
    }
    if comment.trim().is_empty() {
        return Err("Remarks are mandatory".into());
    }
    if needs_verified && !verified {
        return Err("Tick the verification checkbox to proceed".into());
    }
    Ok(())
}
