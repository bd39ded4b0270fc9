/// Result of the active-cards report for one member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSummary {
    pub member_name: String,
    pub active: usize,
    pub in_progress: usize,
}

/// Result of the review and bug reports: who was queried and how many rows
/// were printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountSummary {
    pub identity: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberRollup {
    pub key: String,
    pub cards: Option<CardSummary>,
    pub reviews: Option<CountSummary>,
    pub launchpad: Option<CountSummary>,
    pub bugzilla: Option<CountSummary>,
}

impl MemberRollup {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    /// Display name from the board service when the cards section ran,
    /// otherwise the roster key.
    pub fn display_name(&self) -> &str {
        self.cards
            .as_ref()
            .map(|c| c.member_name.as_str())
            .unwrap_or(&self.key)
    }
}
