//! Generic draft wrapper tracking edit and submit lifecycle.

/// Draft lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DraftPhase {
    /// Fresh copy of the external data, never edited.
    #[default]
    Fresh,
    /// The operator has modified the draft.
    Editing,
    /// A save request is in flight; the save action is disabled.
    Submitting,
    /// The last save failed; the message is kept for the alert.
    Failed,
}

/// A local editable copy of externally-owned data.
#[derive(Clone, Debug, Default)]
pub struct Draft<T> {
    data: T,
    phase: DraftPhase,
    failure: Option<String>,
}

impl<T: Clone> Draft<T> {
    /// Start a fresh draft from external data.
    pub fn new(data: T) -> Self {
        Self {
            data,
            phase: DraftPhase::Fresh,
            failure: None,
        }
    }

    /// The draft data.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Mutable access; marks the draft as edited.
    pub fn data_mut(&mut self) -> &mut T {
        if self.phase == DraftPhase::Fresh {
            self.phase = DraftPhase::Editing;
        }
        self.failure = None;
        &mut self.data
    }

    /// Current phase.
    pub fn phase(&self) -> DraftPhase {
        self.phase
    }

    /// Whether the operator has modified the draft since the last resync.
    pub fn is_dirty(&self) -> bool {
        !matches!(self.phase, DraftPhase::Fresh)
    }

    /// Whether a save is in flight.
    pub fn is_submitting(&self) -> bool {
        self.phase == DraftPhase::Submitting
    }

    /// Replace the draft with a new external copy, discarding any edit.
    pub fn resync(&mut self, data: T) {
        self.data = data;
        self.phase = DraftPhase::Fresh;
        self.failure = None;
    }

    /// Mark the save request as in flight.
    pub fn begin_submit(&mut self) {
        self.phase = DraftPhase::Submitting;
    }

    /// Save succeeded; the draft becomes the fresh external copy.
    pub fn finish_submit(&mut self) {
        self.phase = DraftPhase::Fresh;
        self.failure = None;
    }

    /// Save failed; keep the edit and the message.
    pub fn fail_submit(&mut self, message: String) {
        self.phase = DraftPhase::Failed;
        self.failure = Some(message);
    }

    /// The last failure message, if any.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }
}
