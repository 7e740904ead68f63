//! Row selections shared between linked views

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static CLOCK: AtomicU64 = AtomicU64::new(0);

/// A process-wide modification stamp. Later modifications compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ModifiedTime(u64);

impl ModifiedTime {
    /// Older than every stamp handed out by [`now`](Self::now)
    pub const NEVER: ModifiedTime = ModifiedTime(0);

    pub fn now() -> Self {
        ModifiedTime(CLOCK.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Move this stamp to the present
    pub fn modified(&mut self) {
        *self = Self::now();
    }
}

/// The selected row indices and when they last changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionList {
    indices: Vec<usize>,
    mtime: ModifiedTime,
}

impl SelectionList {
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn modified_time(&self) -> ModifiedTime {
        self.mtime
    }
}

/// A shared handle to the current selection. Clones refer to the same
/// selection, so every linked view sees updates made through any of them.
#[derive(Debug, Clone, Default)]
pub struct SelectionLink {
    current: Rc<RefCell<Option<SelectionList>>>,
}

impl SelectionLink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with `indices` (row order into the chart input)
    pub fn set_selection(&self, indices: Vec<usize>) {
        *self.current.borrow_mut() = Some(SelectionList {
            indices,
            mtime: ModifiedTime::now(),
        });
    }

    /// Select nothing. Views clear their highlight on their next update.
    pub fn clear_selection(&self) {
        self.set_selection(Vec::new());
    }

    /// Run `f` against the current selection, if one was ever set
    pub fn with_selection<R>(&self, f: impl FnOnce(Option<&SelectionList>) -> R) -> R {
        f(self.current.borrow().as_ref())
    }

    pub fn modified_time(&self) -> ModifiedTime {
        self.current
            .borrow()
            .as_ref()
            .map_or(ModifiedTime::NEVER, SelectionList::modified_time)
    }

    /// Whether two handles share a selection
    pub fn same_link(&self, other: &SelectionLink) -> bool {
        Rc::ptr_eq(&self.current, &other.current)
    }
}
