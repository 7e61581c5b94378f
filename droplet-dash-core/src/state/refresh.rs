/// Where the panel is in its fetch cycle.
///
/// `Idle -> Fetching -> Ready | Failed -> Idle`. The last step happens once the
/// result has been shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RefreshPhase {
    #[default]
    Idle,
    Fetching,
    Ready,
    Failed,
}

impl RefreshPhase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Fetching => "fetching",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }
}

/// Proof that a fetch was started. Only the newest ticket may complete it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTicket {
    pub(crate) generation: u64,
}

impl RefreshTicket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
