/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    /// Zero-based position; equals `total` once completed.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub score: usize,
    pub is_complete: bool,
}

impl SessionProgress {
    /// 1-based question number for "Question i of n", clamped to `total`.
    #[must_use]
    pub fn display_number(&self) -> usize {
        (self.position + 1).min(self.total)
    }

    /// Whether the forward button completes the quiz rather than moving on.
    #[must_use]
    pub fn on_last_question(&self) -> bool {
        self.position + 1 >= self.total
    }
}
