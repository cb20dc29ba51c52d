/// Save bookkeeping for preferences: at most one save runs at a time.
#[derive(Debug, Default)]
pub(crate) struct PersistState {
    dirty: bool,
    in_flight: bool,
}

impl PersistState {
    #[cfg(test)]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    #[cfg(test)]
    pub(crate) fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Whether a new save should start now.
    pub(crate) fn should_begin(&self) -> bool {
        self.dirty && !self.in_flight
    }

    /// Start a save of the current snapshot. Changes made while it runs
    /// mark the state dirty again.
    pub(crate) fn begin(&mut self) {
        self.in_flight = true;
        self.dirty = false;
    }

    pub(crate) fn complete(&mut self) {
        self.in_flight = false;
    }

    /// The snapshot was not written, so it is still unsaved.
    pub(crate) fn fail(&mut self) {
        self.in_flight = false;
        self.dirty = true;
    }
}
