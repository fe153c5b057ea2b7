//! Per-view state of the resource controllers and the stores that hold it.

use contracts::shared::list::ListQuery;
use leptos::prelude::*;

use super::error::ResourceError;

// ============================================================================
// Store
// ============================================================================

/// Where a controller keeps its state.
///
/// Both operations report a disposed store (`None` / `false`): a view that
/// unmounted while a request was in flight silently drops the late result.
pub trait StateStore<S> {
    fn read(&self) -> Option<S>;
    fn write(&self, f: impl FnOnce(&mut S)) -> bool;
}

impl<S> StateStore<S> for RwSignal<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn read(&self) -> Option<S> {
        self.try_get_untracked()
    }

    fn write(&self, f: impl FnOnce(&mut S)) -> bool {
        self.try_update(f).is_some()
    }
}

// ============================================================================
// Detail state
// ============================================================================

/// `idle → loading → {ready | failed}`; `ready | idle → submitting → {ready | submit_failed}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
    Submitting,
    SubmitFailed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<E> {
    pub phase: Phase,
    pub entity: Option<E>,
    pub error: Option<ResourceError>,
    /// Bumped by every load; only the latest load may write its result
    pub generation: u64,
}

impl<E> Default for ResourceState<E> {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            entity: None,
            error: None,
            generation: 0,
        }
    }
}

impl<E> ResourceState<E> {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// A failed load blocks the form; only "back" is offered
    pub fn is_blocked(&self) -> bool {
        self.phase == Phase::Failed
    }

    pub fn visible_error(&self) -> Option<String> {
        self.error
            .as_ref()
            .filter(|err| err.is_user_visible())
            .map(ToString::to_string)
    }
}

// ============================================================================
// List state
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<E> {
    /// Rows in backend order
    pub items: Vec<E>,
    pub loading: bool,
    pub loaded: bool,
    pub error: Option<ResourceError>,
    /// Row awaiting delete confirmation
    pub pending_delete: Option<String>,
    pub deleting: bool,
    pub generation: u64,
}

impl<E> Default for ListState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            loaded: false,
            error: None,
            pending_delete: None,
            deleting: false,
            generation: 0,
        }
    }
}

/// What a list shows in place of its table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyView {
    /// The collection itself is empty
    FirstRecord,
    /// Rows exist, but the page, search or filter selects none of them
    NoMatches,
}

impl<E> ListState<E> {
    /// `None` while loading, after a failure or when there are rows to show.
    /// `visible` is the row count left after client-side narrowing.
    pub fn empty_view(&self, query: &ListQuery, visible: usize) -> Option<EmptyView> {
        if !self.loaded || self.error.is_some() {
            return None;
        }
        if self.items.is_empty() && !query.is_narrowed() {
            Some(EmptyView::FirstRecord)
        } else if visible == 0 {
            Some(EmptyView::NoMatches)
        } else {
            None
        }
    }

    pub fn visible_error(&self) -> Option<String> {
        self.error
            .as_ref()
            .filter(|err| err.is_user_visible())
            .map(ToString::to_string)
    }
}
