use chrono::Local;

use crate::session::Session;

const HEADER: &str = "IME Priority Referral Form Summary";
const HEADER_RULE: &str = "=====================================";
const STEP_SEPARATOR: &str = "\n↓\n";

/// Render the session into the fixed plain-text summary template.
///
/// Reads state only; repeated calls on a completed session yield identical
/// output. Before completion the current time stands in for the completion
/// timestamp so preview renders never panic.
pub fn render_summary(session: &Session) -> String {
    let completed = session.completed_at().unwrap_or_else(Local::now);
    let duration = completed
        .signed_duration_since(session.started_at())
        .num_seconds()
        .max(0);

    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(HEADER_RULE);
    out.push_str("\n\n");
    out.push_str(&format!(
        "Completed: {}\n",
        completed.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("Duration: {} seconds\n\n", duration));

    out.push_str("RESPONSES:\n");
    out.push_str("----------\n");
    for (label, value) in session.answers().iter() {
        if !value.trim().is_empty() {
            out.push_str(&format!("{}: {}\n", label, value));
        }
    }

    out.push_str("\nPROCESS FLOW:\n");
    out.push_str("-------------\n");
    out.push_str(&session.path().join(STEP_SEPARATOR));
    out
}
