#![allow(missing_docs)]

pub mod fields;
pub mod router;
pub mod screen;
pub mod session;
pub mod summary;
pub mod validate;

pub use fields::{
    CancellationReason, Choice, DeterminationQuestion, FieldValues, ImeReason, InjuryType,
    RequestReason, YesNo, field,
};
pub use router::{back_screen, next_screen};
pub use screen::{Progress, Screen};
pub use session::{AnswerLog, ImeBranch, Session};
pub use summary::render_summary;
pub use validate::{ValidationError, validate};
