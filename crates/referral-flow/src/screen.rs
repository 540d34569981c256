/// One named step of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Cancellation,
    ImeReason,
    ClaimDetermination,
    Priority,
    SimpleEnd,
    Summary,
}

impl Screen {
    /// Fixed screen order backing the progress indicator.
    pub const ALL: [Screen; 7] = [
        Screen::Start,
        Screen::Cancellation,
        Screen::ImeReason,
        Screen::ClaimDetermination,
        Screen::Priority,
        Screen::SimpleEnd,
        Screen::Summary,
    ];

    /// Zero-based position in the fixed order.
    pub fn ordinal(self) -> usize {
        match self {
            Screen::Start => 0,
            Screen::Cancellation => 1,
            Screen::ImeReason => 2,
            Screen::ClaimDetermination => 3,
            Screen::Priority => 4,
            Screen::SimpleEnd => 5,
            Screen::Summary => 6,
        }
    }

    /// Stable key used by replay files and seeded answers.
    pub fn key(self) -> &'static str {
        match self {
            Screen::Start => "start",
            Screen::Cancellation => "cancellation",
            Screen::ImeReason => "ime_reason",
            Screen::ClaimDetermination => "claim_determination",
            Screen::Priority => "priority",
            Screen::SimpleEnd => "simple_end",
            Screen::Summary => "summary",
        }
    }

    /// Heading shown when the screen becomes active.
    pub fn title(self) -> &'static str {
        match self {
            Screen::Start => "Request details",
            Screen::Cancellation => "Cancellation details",
            Screen::ImeReason => "IME reason",
            Screen::ClaimDetermination => "Claim determination",
            Screen::Priority => "Priority assessment",
            Screen::SimpleEnd => "Request received",
            Screen::Summary => "Summary",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Screen::Summary)
    }
}

/// Progress counters for the step indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub step: usize,
    pub total: usize,
}

impl Progress {
    pub fn of(screen: Screen) -> Self {
        Self {
            step: screen.ordinal() + 1,
            total: Screen::ALL.len(),
        }
    }

    pub fn percent(&self) -> f64 {
        (self.step as f64 / self.total as f64) * 100.0
    }

    pub fn label(&self) -> String {
        format!("Step {} of {}", self.step, self.total)
    }
}
