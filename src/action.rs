//! AsyncAction - observable state of a single in-flight request
//!
//! Wraps the pending-request-id bookkeeping every fetch in the app
//! needs: begin with a request id, settle with the id the response
//! carries. Responses whose id no longer matches (superseded run, or
//! the page was left) are discarded.

/// Lifecycle of an AsyncAction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActionStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// State of a fire-and-await side-effecting request.
///
/// Exactly one of `error`/`result` is populated when the status is
/// `Failed`/`Succeeded`. Overlap policy is latest-wins: a new `begin`
/// replaces the pending id, so an earlier in-flight outcome can never
/// settle.
#[derive(Clone, Debug)]
pub struct AsyncAction<T> {
    status: ActionStatus,
    error: Option<String>,
    result: Option<T>,
    pending_id: Option<u64>,
}

impl<T> Default for AsyncAction<T> {
    fn default() -> Self {
        AsyncAction {
            status: ActionStatus::Idle,
            error: None,
            result: None,
            pending_id: None,
        }
    }
}

impl<T> AsyncAction<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition to `Pending` for request `id`, clearing any previous
    /// outcome. Supersedes an in-flight run if one exists.
    pub fn begin(&mut self, id: u64) {
        self.status = ActionStatus::Pending;
        self.error = None;
        self.result = None;
        self.pending_id = Some(id);
    }

    /// Apply the outcome of request `id`. Returns false (and changes
    /// nothing) when `id` is not the in-flight request.
    pub fn settle(&mut self, id: u64, outcome: Result<T, String>) -> bool {
        if self.pending_id != Some(id) {
            return false;
        }
        self.pending_id = None;
        match outcome {
            Ok(value) => {
                self.status = ActionStatus::Succeeded;
                self.result = Some(value);
                self.error = None;
            }
            Err(message) => {
                self.status = ActionStatus::Failed;
                self.error = Some(message);
                self.result = None;
            }
        }
        true
    }

    /// True when `id` is the in-flight request of this action
    pub fn owns(&self, id: u64) -> bool {
        self.pending_id == Some(id)
    }

    pub fn status(&self) -> ActionStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == ActionStatus::Pending
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Forget any outcome; back to `Idle`. An in-flight response will
    /// find no matching id and be dropped.
    #[allow(dead_code)]
    pub fn reset(&mut self) {
        *self = AsyncAction {
            status: ActionStatus::Idle,
            error: None,
            result: None,
            pending_id: None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_path() {
        let mut action: AsyncAction<u32> = AsyncAction::new();
        assert_eq!(action.status(), ActionStatus::Idle);

        action.begin(1);
        assert!(action.is_pending());
        assert!(action.error().is_none());

        assert!(action.settle(1, Ok(42)));
        assert_eq!(action.status(), ActionStatus::Succeeded);
        assert_eq!(action.result(), Some(&42));
        assert!(action.error().is_none());
    }

    #[test]
    fn failure_path() {
        let mut action: AsyncAction<u32> = AsyncAction::new();
        action.begin(7);
        assert!(action.settle(7, Err("insufficient funds".into())));
        assert_eq!(action.status(), ActionStatus::Failed);
        assert_eq!(action.error(), Some("insufficient funds"));
        assert!(action.result().is_none());
    }

    #[test]
    fn rerun_clears_previous_outcome() {
        let mut action: AsyncAction<u32> = AsyncAction::new();
        action.begin(1);
        action.settle(1, Err("boom".into()));
        action.begin(2);
        assert!(action.is_pending());
        assert!(action.error().is_none());
        assert!(action.result().is_none());
    }

    #[test]
    fn overlapping_runs_latest_wins() {
        let mut action: AsyncAction<u32> = AsyncAction::new();
        action.begin(1);
        action.begin(2);

        // The superseded run resolves first: discarded.
        assert!(!action.settle(1, Ok(111)));
        assert!(action.is_pending());

        assert!(action.settle(2, Ok(222)));
        assert_eq!(action.result(), Some(&222));
    }

    #[test]
    fn stale_settle_after_reset_is_discarded() {
        let mut action: AsyncAction<u32> = AsyncAction::new();
        action.begin(5);
        action.reset();
        assert!(!action.settle(5, Ok(1)));
        assert_eq!(action.status(), ActionStatus::Idle);
    }
}
