/// Lifecycle of a single login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// Only one verification may be in flight at a time.
    pub fn accepts_submission(&self) -> bool {
        !matches!(self, SubmissionState::Pending)
    }
}
