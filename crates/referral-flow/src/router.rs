use crate::fields::{Choice, FieldValues, ImeReason, RequestReason, field};
use crate::screen::Screen;
use crate::session::ImeBranch;

/// Next screen for a forward move, pure over the current screen and its fields.
///
/// Callers validate first; an unparseable select falls through to the
/// "otherwise" arm of the transition table.
pub fn next_screen(screen: Screen, fields: &FieldValues) -> Screen {
    match screen {
        Screen::Start => match fields.get(field::REASON).and_then(RequestReason::parse) {
            Some(RequestReason::ImeCancellation) => Screen::Cancellation,
            Some(RequestReason::ImeBooking) => Screen::ImeReason,
            _ => Screen::SimpleEnd,
        },
        Screen::ImeReason => match fields.get(field::REASON).and_then(ImeReason::parse) {
            Some(ImeReason::ClaimDetermination) => Screen::ClaimDetermination,
            _ => Screen::Priority,
        },
        Screen::ClaimDetermination => Screen::Priority,
        Screen::Cancellation | Screen::Priority | Screen::SimpleEnd => Screen::Summary,
        Screen::Summary => Screen::Summary,
    }
}

/// Documented predecessor for a Back press, or `None` from Start and Summary.
///
/// Priority's predecessor depends on which arm the booking flow took, carried
/// as an explicit branch rather than inferred from recorded answer text.
pub fn back_screen(screen: Screen, branch: Option<ImeBranch>) -> Option<Screen> {
    match screen {
        Screen::Cancellation | Screen::ImeReason | Screen::SimpleEnd => Some(Screen::Start),
        Screen::ClaimDetermination => Some(Screen::ImeReason),
        Screen::Priority => Some(match branch {
            Some(ImeBranch::ClaimDetermination) => Screen::ClaimDetermination,
            _ => Screen::ImeReason,
        }),
        Screen::Start | Screen::Summary => None,
    }
}
