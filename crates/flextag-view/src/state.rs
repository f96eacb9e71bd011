//! Clean/Dirty tracking for the container.

/// Whether the last layout pass still reflects the container's inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutState {
    Clean,
    /// Inputs changed since the last pass. A fresh container starts here.
    #[default]
    Dirty,
}

impl LayoutState {
    pub fn is_dirty(&self) -> bool {
        matches!(self, LayoutState::Dirty)
    }

    pub fn mark_dirty(&mut self) {
        *self = LayoutState::Dirty;
    }

    /// Consume a pending invalidation. Returns `true` if a pass is due and
    /// leaves the state clean.
    pub fn take(&mut self) -> bool {
        std::mem::replace(self, LayoutState::Clean).is_dirty()
    }
}
