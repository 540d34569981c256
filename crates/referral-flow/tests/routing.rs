use referral_flow::{
    FieldValues, ImeBranch, Screen, back_screen, field, next_screen,
};

fn fields(entries: &[(&str, &str)]) -> FieldValues {
    let mut values = FieldValues::new();
    for (id, value) in entries {
        values.set(id, *value);
    }
    values
}

#[test]
fn start_routes_on_request_reason() {
    let cancellation = fields(&[(field::REASON, "ime_cancellation")]);
    assert_eq!(
        next_screen(Screen::Start, &cancellation),
        Screen::Cancellation
    );

    let booking = fields(&[(field::REASON, "ime_booking")]);
    assert_eq!(next_screen(Screen::Start, &booking), Screen::ImeReason);

    let enquiry = fields(&[(field::REASON, "general_enquiry")]);
    assert_eq!(next_screen(Screen::Start, &enquiry), Screen::SimpleEnd);
}

#[test]
fn unparseable_reason_takes_otherwise_arm() {
    let unknown = fields(&[(field::REASON, "something_else")]);
    assert_eq!(next_screen(Screen::Start, &unknown), Screen::SimpleEnd);
    assert_eq!(next_screen(Screen::ImeReason, &unknown), Screen::Priority);
}

#[test]
fn ime_reason_routes_to_claim_determination() {
    let determination = fields(&[(field::REASON, "claim_determination")]);
    assert_eq!(
        next_screen(Screen::ImeReason, &determination),
        Screen::ClaimDetermination
    );

    let review = fields(&[(field::REASON, "treatment_review")]);
    assert_eq!(next_screen(Screen::ImeReason, &review), Screen::Priority);
}

#[test]
fn submit_screens_route_to_summary() {
    let empty = FieldValues::new();
    assert_eq!(next_screen(Screen::Cancellation, &empty), Screen::Summary);
    assert_eq!(
        next_screen(Screen::ClaimDetermination, &empty),
        Screen::Priority
    );
    assert_eq!(next_screen(Screen::Priority, &empty), Screen::Summary);
    assert_eq!(next_screen(Screen::SimpleEnd, &empty), Screen::Summary);
    assert_eq!(next_screen(Screen::Summary, &empty), Screen::Summary);
}

#[test]
fn back_returns_to_documented_predecessor() {
    assert_eq!(back_screen(Screen::Cancellation, None), Some(Screen::Start));
    assert_eq!(back_screen(Screen::ImeReason, None), Some(Screen::Start));
    assert_eq!(back_screen(Screen::SimpleEnd, None), Some(Screen::Start));
    assert_eq!(
        back_screen(Screen::ClaimDetermination, None),
        Some(Screen::ImeReason)
    );
    assert_eq!(back_screen(Screen::Start, None), None);
    assert_eq!(back_screen(Screen::Summary, None), None);
}

#[test]
fn priority_back_follows_recorded_branch() {
    assert_eq!(
        back_screen(Screen::Priority, Some(ImeBranch::ClaimDetermination)),
        Some(Screen::ClaimDetermination)
    );
    assert_eq!(
        back_screen(Screen::Priority, Some(ImeBranch::Direct)),
        Some(Screen::ImeReason)
    );
    assert_eq!(
        back_screen(Screen::Priority, None),
        Some(Screen::ImeReason)
    );
}
