use std::fs;
use std::path::Path;
use std::process::Output;

use assert_cmd::Command;
use tempfile::tempdir;

fn replay(answers_path: &Path, extra: &[&str]) -> Output {
    Command::cargo_bin("ime-referral")
        .expect("binary builds")
        .arg("replay")
        .arg("--answers")
        .arg(answers_path)
        .args(extra)
        .output()
        .expect("command runs")
}

#[test]
fn replay_urgent_booking_prints_priority_one_summary() {
    let dir = tempdir().expect("tempdir");
    let answers = dir.path().join("answers.json");
    fs::write(
        &answers,
        r#"{
            "start": { "claim_number": "C123", "reason": "ime_booking" },
            "ime_reason": { "reason": "claim_determination" },
            "claim_determination": {
                "injury_type": "physical",
                "determination_question": "other",
                "other_question": "disputed"
            },
            "priority": { "is_urgent": "yes", "urgency_reason": "surgery pending" }
        }"#,
    )
    .expect("write answers");

    let output = replay(&answers, &[]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert!(stdout.contains("IME Priority Referral Form Summary"));
    assert!(stdout.contains("Claim Number: C123"));
    assert!(stdout.contains("Determination Question: disputed"));
    assert!(stdout.contains("Final Outcome: Submit IME Booking for Priority 1 (Urgent)"));
    assert!(stdout.contains("PROCESS FLOW:"));
}

#[test]
fn replay_cancellation_omits_final_outcome() {
    let dir = tempdir().expect("tempdir");
    let answers = dir.path().join("answers.json");
    fs::write(
        &answers,
        r#"{
            "start": { "claim_number": "C55", "reason": "ime_cancellation" },
            "cancellation": {
                "appointment_date": "2026-09-12",
                "cancellation_reason": "claimant_unavailable",
                "reschedule_needed": "no"
            }
        }"#,
    )
    .expect("write answers");

    let output = replay(&answers, &[]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert!(stdout.contains("Reschedule Needed: no"));
    assert!(!stdout.contains("Final Outcome"));
}

#[test]
fn replay_writes_summary_file_when_asked() {
    let dir = tempdir().expect("tempdir");
    let answers = dir.path().join("answers.json");
    let summary = dir.path().join("summary.txt");
    fs::write(
        &answers,
        r#"{
            "start": { "claim_number": "C7", "reason": "general_enquiry" }
        }"#,
    )
    .expect("write answers");

    let out_arg = summary.to_str().expect("utf8 path");
    let output = replay(&answers, &["--out", out_arg]);
    assert!(output.status.success());
    let written = fs::read_to_string(&summary).expect("summary file");
    assert!(written.contains("Final Outcome: Request forwarded to appropriate team"));
}

#[test]
fn replay_fails_on_missing_required_field() {
    let dir = tempdir().expect("tempdir");
    let answers = dir.path().join("answers.json");
    fs::write(
        &answers,
        r#"{
            "start": { "reason": "ime_booking" }
        }"#,
    )
    .expect("write answers");

    let output = replay(&answers, &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("start screen"));
    assert!(stderr.contains("Please enter a claim number."));
}
