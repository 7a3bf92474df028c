use std::sync::atomic::{AtomicU64, Ordering};

///
/// Flag indicating that the tile images of a layer need to be regenerated
///
/// The flag is a pair of generation counters: marking the flag increases the 'requested' generation, and a
/// pass that finishes updates the 'completed' generation to the value it saw when it started. A change that
/// arrives while a pass is in progress therefore leaves the flag set for the next pass.
///
#[derive(Debug)]
pub struct DirtyFlag {
    requested:  AtomicU64,
    completed:  AtomicU64,
}

///
/// A pass that is regenerating images, started by `DirtyFlag::begin_pass()`
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DirtyPass {
    generation: u64,
    dirty:      bool,
}

impl DirtyPass {
    ///
    /// True if the images being maintained by this pass need to be regenerated
    ///
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl DirtyFlag {
    ///
    /// Creates a flag that is set (nothing has been generated yet)
    ///
    pub fn new() -> DirtyFlag {
        DirtyFlag {
            requested:  AtomicU64::new(1),
            completed:  AtomicU64::new(0),
        }
    }

    ///
    /// Indicates that the images need to be regenerated
    ///
    pub fn mark(&self) {
        self.requested.fetch_add(1, Ordering::AcqRel);
    }

    ///
    /// True if a change has been made since the last pass was completed
    ///
    pub fn is_set(&self) -> bool {
        self.requested.load(Ordering::Acquire) > self.completed.load(Ordering::Acquire)
    }

    ///
    /// Starts a pass over the images, taking a snapshot of the current state of the flag
    ///
    pub fn begin_pass(&self) -> DirtyPass {
        let generation  = self.requested.load(Ordering::Acquire);
        let dirty       = generation > self.completed.load(Ordering::Acquire);

        DirtyPass { generation, dirty }
    }

    ///
    /// Marks a pass as completed: the flag is cleared unless another change was made after the pass began
    ///
    pub fn complete(&self, pass: DirtyPass) {
        self.completed.fetch_max(pass.generation, Ordering::AcqRel);
    }
}

impl Default for DirtyFlag {
    fn default() -> Self { DirtyFlag::new() }
}
