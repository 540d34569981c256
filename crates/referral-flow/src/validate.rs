use thiserror::Error;

use crate::fields::{
    CancellationReason, Choice, DeterminationQuestion, FieldValues, ImeReason, InjuryType,
    RequestReason, YesNo, field,
};
use crate::screen::Screen;

/// First failing field for a screen, with the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Field id the UI should focus.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Fail-fast presence checks for the given screen, fixed order, first failure wins.
pub fn validate(screen: Screen, fields: &FieldValues) -> Result<(), ValidationError> {
    match screen {
        Screen::Start => validate_start(fields),
        Screen::Cancellation => validate_cancellation(fields),
        Screen::ImeReason => validate_ime_reason(fields),
        Screen::ClaimDetermination => validate_claim_determination(fields),
        Screen::Priority => validate_priority(fields),
        Screen::SimpleEnd | Screen::Summary => Ok(()),
    }
}

fn validate_start(fields: &FieldValues) -> Result<(), ValidationError> {
    if fields.trimmed(field::CLAIM_NUMBER).is_none() {
        return Err(ValidationError::new(
            field::CLAIM_NUMBER,
            "Please enter a claim number.",
        ));
    }
    require_choice::<RequestReason>(
        fields,
        field::REASON,
        "Please select a reason for your request.",
    )?;
    Ok(())
}

fn validate_cancellation(fields: &FieldValues) -> Result<(), ValidationError> {
    if fields.trimmed(field::APPOINTMENT_DATE).is_none() {
        return Err(ValidationError::new(
            field::APPOINTMENT_DATE,
            "Please select the appointment date.",
        ));
    }
    require_choice::<CancellationReason>(
        fields,
        field::CANCELLATION_REASON,
        "Please select a cancellation reason.",
    )?;
    require_choice::<YesNo>(
        fields,
        field::RESCHEDULE_NEEDED,
        "Please indicate if rescheduling is needed.",
    )?;
    Ok(())
}

fn validate_ime_reason(fields: &FieldValues) -> Result<(), ValidationError> {
    require_choice::<ImeReason>(fields, field::REASON, "Please select an IME reason.")?;
    Ok(())
}

fn validate_claim_determination(fields: &FieldValues) -> Result<(), ValidationError> {
    require_choice::<InjuryType>(fields, field::INJURY_TYPE, "Please select the injury type.")?;
    let question = require_choice::<DeterminationQuestion>(
        fields,
        field::DETERMINATION_QUESTION,
        "Please select the determination question.",
    )?;
    if question == DeterminationQuestion::Other && fields.trimmed(field::OTHER_QUESTION).is_none() {
        return Err(ValidationError::new(
            field::OTHER_QUESTION,
            "Please specify the other question.",
        ));
    }
    Ok(())
}

fn validate_priority(fields: &FieldValues) -> Result<(), ValidationError> {
    // The urgency reason is surfaced only when urgent and never blocks submit.
    require_choice::<YesNo>(
        fields,
        field::IS_URGENT,
        "Please indicate if this matter is urgent.",
    )?;
    Ok(())
}

fn require_choice<C: Choice>(
    fields: &FieldValues,
    id: &'static str,
    message: &str,
) -> Result<C, ValidationError> {
    fields
        .get(id)
        .and_then(C::parse)
        .ok_or_else(|| ValidationError::new(id, message))
}
