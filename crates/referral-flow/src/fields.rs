use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field identifiers shared by the screens, the validators, and the router.
pub mod field {
    pub const CLAIM_NUMBER: &str = "claim_number";
    pub const REASON: &str = "reason";
    pub const APPOINTMENT_DATE: &str = "appointment_date";
    pub const CANCELLATION_REASON: &str = "cancellation_reason";
    pub const RESCHEDULE_NEEDED: &str = "reschedule_needed";
    pub const ADDITIONAL_INFO: &str = "additional_info";
    pub const INJURY_TYPE: &str = "injury_type";
    pub const DETERMINATION_QUESTION: &str = "determination_question";
    pub const OTHER_QUESTION: &str = "other_question";
    pub const IS_URGENT: &str = "is_urgent";
    pub const URGENCY_REASON: &str = "urgency_reason";
}

/// Raw field values captured from one screen, keyed by field id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues(BTreeMap<String, String>);

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, id: &str, value: impl Into<String>) {
        self.0.insert(id.to_string(), value.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn remove(&mut self, id: &str) -> Option<String> {
        self.0.remove(id)
    }

    /// Trimmed value, with empty-after-trim treated as absent.
    pub fn trimmed(&self, id: &str) -> Option<&str> {
        self.get(id).map(str::trim).filter(|value| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for FieldValues {
    fn from(entries: [(&str, &str); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(id, value)| (id.to_string(), value.to_string()))
                .collect(),
        )
    }
}

/// Closed select vocabulary: machine token on the wire, human label in answers.
pub trait Choice: Copy + Sized + 'static {
    const ALL: &'static [Self];

    fn token(self) -> &'static str;
    fn label(self) -> &'static str;

    fn parse(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|choice| choice.token() == token)
    }

    fn tokens() -> Vec<&'static str> {
        Self::ALL.iter().copied().map(Self::token).collect()
    }
}

/// Reason for the initial request, selected on the start screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestReason {
    ImeBooking,
    ImeCancellation,
    GeneralEnquiry,
}

impl Choice for RequestReason {
    const ALL: &'static [Self] = &[
        RequestReason::ImeBooking,
        RequestReason::ImeCancellation,
        RequestReason::GeneralEnquiry,
    ];

    fn token(self) -> &'static str {
        match self {
            RequestReason::ImeBooking => "ime_booking",
            RequestReason::ImeCancellation => "ime_cancellation",
            RequestReason::GeneralEnquiry => "general_enquiry",
        }
    }

    fn label(self) -> &'static str {
        match self {
            RequestReason::ImeBooking => "IME booking",
            RequestReason::ImeCancellation => "IME cancellation",
            RequestReason::GeneralEnquiry => "General enquiry",
        }
    }
}

/// Why an existing appointment is being cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancellationReason {
    ClaimantUnavailable,
    ExaminerUnavailable,
    ClaimResolved,
    Other,
}

impl Choice for CancellationReason {
    const ALL: &'static [Self] = &[
        CancellationReason::ClaimantUnavailable,
        CancellationReason::ExaminerUnavailable,
        CancellationReason::ClaimResolved,
        CancellationReason::Other,
    ];

    fn token(self) -> &'static str {
        match self {
            CancellationReason::ClaimantUnavailable => "claimant_unavailable",
            CancellationReason::ExaminerUnavailable => "examiner_unavailable",
            CancellationReason::ClaimResolved => "claim_resolved",
            CancellationReason::Other => "other",
        }
    }

    fn label(self) -> &'static str {
        match self {
            CancellationReason::ClaimantUnavailable => "Claimant unavailable",
            CancellationReason::ExaminerUnavailable => "Examiner unavailable",
            CancellationReason::ClaimResolved => "Claim resolved",
            CancellationReason::Other => "Other",
        }
    }
}

/// Purpose of the IME booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImeReason {
    ClaimDetermination,
    TreatmentReview,
    PermanentImpairment,
}

impl Choice for ImeReason {
    const ALL: &'static [Self] = &[
        ImeReason::ClaimDetermination,
        ImeReason::TreatmentReview,
        ImeReason::PermanentImpairment,
    ];

    fn token(self) -> &'static str {
        match self {
            ImeReason::ClaimDetermination => "claim_determination",
            ImeReason::TreatmentReview => "treatment_review",
            ImeReason::PermanentImpairment => "permanent_impairment",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ImeReason::ClaimDetermination => "Claim determination",
            ImeReason::TreatmentReview => "Treatment review",
            ImeReason::PermanentImpairment => "Permanent impairment assessment",
        }
    }
}

/// Nature of the injury under determination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjuryType {
    Physical,
    Psychological,
    Both,
}

impl Choice for InjuryType {
    const ALL: &'static [Self] = &[
        InjuryType::Physical,
        InjuryType::Psychological,
        InjuryType::Both,
    ];

    fn token(self) -> &'static str {
        match self {
            InjuryType::Physical => "physical",
            InjuryType::Psychological => "psychological",
            InjuryType::Both => "both",
        }
    }

    fn label(self) -> &'static str {
        match self {
            InjuryType::Physical => "Physical",
            InjuryType::Psychological => "Psychological",
            InjuryType::Both => "Physical and psychological",
        }
    }
}

/// Determination question put to the examiner; `Other` opens a free-text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeterminationQuestion {
    Liability,
    Capacity,
    Treatment,
    Other,
}

impl Choice for DeterminationQuestion {
    const ALL: &'static [Self] = &[
        DeterminationQuestion::Liability,
        DeterminationQuestion::Capacity,
        DeterminationQuestion::Treatment,
        DeterminationQuestion::Other,
    ];

    fn token(self) -> &'static str {
        match self {
            DeterminationQuestion::Liability => "liability",
            DeterminationQuestion::Capacity => "capacity",
            DeterminationQuestion::Treatment => "treatment",
            DeterminationQuestion::Other => "other",
        }
    }

    fn label(self) -> &'static str {
        match self {
            DeterminationQuestion::Liability => "Liability for the claimed condition",
            DeterminationQuestion::Capacity => "Work capacity",
            DeterminationQuestion::Treatment => "Reasonableness of treatment",
            DeterminationQuestion::Other => "Other (specify below)",
        }
    }
}

/// Two-state choice used by the reschedule and urgency questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl Choice for YesNo {
    const ALL: &'static [Self] = &[YesNo::Yes, YesNo::No];

    fn token(self) -> &'static str {
        match self {
            YesNo::Yes => "yes",
            YesNo::No => "no",
        }
    }

    fn label(self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}
