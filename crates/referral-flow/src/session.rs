use chrono::{DateTime, Local};

use crate::fields::{
    CancellationReason, Choice, DeterminationQuestion, FieldValues, ImeReason, InjuryType,
    RequestReason, YesNo, field,
};
use crate::router::{back_screen, next_screen};
use crate::screen::{Progress, Screen};
use crate::summary;
use crate::validate::{ValidationError, validate};

pub const OUTCOME_PRIORITY_1: &str = "Submit IME Booking for Priority 1 (Urgent)";
pub const OUTCOME_PRIORITY_3: &str = "Submit IME Booking for Priority 3 (Standard)";
pub const OUTCOME_FORWARDED: &str = "Request forwarded to appropriate team";

/// Which arm of the booking flow the session took after the IME-reason screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImeBranch {
    Direct,
    ClaimDetermination,
}

/// Insertion-ordered answer entries keyed by question label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerLog {
    entries: Vec<(String, String)>,
}

impl AnswerLog {
    /// Appends the entry, or overwrites in place without changing its position.
    pub fn record(&mut self, label: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| key == label) {
            entry.1 = value;
        } else {
            self.entries.push((label.to_string(), value));
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(label, value)| (label.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One wizard run: current screen, accumulated answers, and the decision trail.
///
/// The session is an explicit value owned by the caller; nothing here is
/// process-global. A new run means a new `Session`.
#[derive(Debug, Clone)]
pub struct Session {
    current: Screen,
    answers: AnswerLog,
    path: Vec<String>,
    started_at: DateTime<Local>,
    completed_at: Option<DateTime<Local>>,
    ime_branch: Option<ImeBranch>,
}

impl Session {
    pub fn new() -> Self {
        Self::with_start_time(Local::now())
    }

    pub fn with_start_time(started_at: DateTime<Local>) -> Self {
        Self {
            current: Screen::Start,
            answers: AnswerLog::default(),
            path: Vec::new(),
            started_at,
            completed_at: None,
            ime_branch: None,
        }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn answers(&self) -> &AnswerLog {
        &self.answers
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Local>> {
        self.completed_at
    }

    pub fn ime_branch(&self) -> Option<ImeBranch> {
        self.ime_branch
    }

    pub fn progress(&self) -> Progress {
        Progress::of(self.current)
    }

    /// Validates the active screen, records its answers and path entry, and
    /// moves to the routed screen. Advancing from Summary is a no-op.
    pub fn advance(&mut self, fields: &FieldValues) -> Result<Screen, ValidationError> {
        if self.current == Screen::Summary {
            return Ok(Screen::Summary);
        }
        validate(self.current, fields)?;
        self.record_screen(fields);
        self.current = next_screen(self.current, fields);
        if self.current == Screen::Summary && self.completed_at.is_none() {
            self.completed_at = Some(Local::now());
        }
        Ok(self.current)
    }

    /// Moves to the documented predecessor, recording nothing.
    pub fn back(&mut self) -> Option<Screen> {
        let target = back_screen(self.current, self.ime_branch)?;
        self.current = target;
        Some(target)
    }

    pub fn summary_text(&self) -> String {
        summary::render_summary(self)
    }

    fn record_screen(&mut self, fields: &FieldValues) {
        // validate() already ran for this screen, so required values parse.
        match self.current {
            Screen::Start => {
                self.answers
                    .record("Claim Number", fields.trimmed(field::CLAIM_NUMBER).unwrap_or_default());
                if let Some(reason) = fields.get(field::REASON).and_then(RequestReason::parse) {
                    self.answers.record("Reason for Request", reason.label());
                    self.path.push(format!("Started with: {}", reason.label()));
                }
            }
            Screen::Cancellation => {
                self.answers.record(
                    "Appointment Date",
                    fields.trimmed(field::APPOINTMENT_DATE).unwrap_or_default(),
                );
                if let Some(reason) = fields
                    .get(field::CANCELLATION_REASON)
                    .and_then(CancellationReason::parse)
                {
                    self.answers.record("Cancellation Reason", reason.label());
                }
                let reschedule = fields.get(field::RESCHEDULE_NEEDED).and_then(YesNo::parse);
                self.answers.record(
                    "Reschedule Needed",
                    reschedule.map(YesNo::token).unwrap_or("Not answered"),
                );
                self.answers.record(
                    "Additional Information",
                    fields.trimmed(field::ADDITIONAL_INFO).unwrap_or_default(),
                );
                self.path.push("Completed cancellation form".to_string());
            }
            Screen::ImeReason => {
                if let Some(reason) = fields.get(field::REASON).and_then(ImeReason::parse) {
                    self.answers.record("IME Reason", reason.label());
                    self.path
                        .push(format!("Selected IME reason: {}", reason.label()));
                    self.ime_branch = Some(match reason {
                        ImeReason::ClaimDetermination => ImeBranch::ClaimDetermination,
                        _ => ImeBranch::Direct,
                    });
                }
            }
            Screen::ClaimDetermination => {
                if let Some(injury) = fields.get(field::INJURY_TYPE).and_then(InjuryType::parse) {
                    self.answers.record("Injury Type", injury.label());
                }
                match fields
                    .get(field::DETERMINATION_QUESTION)
                    .and_then(DeterminationQuestion::parse)
                {
                    Some(DeterminationQuestion::Other) => self.answers.record(
                        "Determination Question",
                        fields.trimmed(field::OTHER_QUESTION).unwrap_or_default(),
                    ),
                    Some(question) => {
                        self.answers.record("Determination Question", question.label());
                    }
                    None => {}
                }
                self.path
                    .push("Completed claim determination questions".to_string());
            }
            Screen::Priority => {
                let urgent = fields
                    .get(field::IS_URGENT)
                    .and_then(YesNo::parse)
                    .unwrap_or(YesNo::No);
                self.answers.record("Is Urgent", urgent.token());
                if urgent == YesNo::Yes {
                    self.answers.record(
                        "Urgency Reason",
                        fields.trimmed(field::URGENCY_REASON).unwrap_or_default(),
                    );
                }
                let outcome = match urgent {
                    YesNo::Yes => OUTCOME_PRIORITY_1,
                    YesNo::No => OUTCOME_PRIORITY_3,
                };
                self.answers.record("Final Outcome", outcome);
                self.path
                    .push(format!("Completed priority assessment: {}", outcome));
            }
            Screen::SimpleEnd => {
                self.answers.record("Final Outcome", OUTCOME_FORWARDED);
                self.path.push("Completed simple request".to_string());
            }
            Screen::Summary => {}
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
