use referral_flow::{
    AnswerLog, CancellationReason, Choice, DeterminationQuestion, FieldValues, ImeReason,
    InjuryType, Progress, RequestReason, Screen, ValidationError, YesNo, field,
};

/// Controls which bits of state the wizard prints.
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum Verbosity {
    /// Clean output: step headings and prompts only.
    Clean,
    /// Verbose output: percentages, recorded answers, failing field ids.
    Verbose,
}

impl Verbosity {
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Clean
        }
    }

    pub fn is_verbose(&self) -> bool {
        matches!(self, Verbosity::Verbose)
    }
}

/// One prompt on a screen: where the answer lands and how to ask for it.
pub struct FieldPrompt {
    pub id: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub choices: Vec<&'static str>,
    /// Prompt only when the predicate holds over the values gathered so far.
    pub when: Option<fn(&FieldValues) -> bool>,
}

impl FieldPrompt {
    fn text(id: &'static str, label: &'static str, required: bool) -> Self {
        Self {
            id,
            label,
            required,
            choices: Vec::new(),
            when: None,
        }
    }

    fn select(id: &'static str, label: &'static str, choices: Vec<&'static str>) -> Self {
        Self {
            id,
            label,
            required: true,
            choices,
            when: None,
        }
    }

    fn when(mut self, predicate: fn(&FieldValues) -> bool) -> Self {
        self.when = Some(predicate);
        self
    }

    pub fn applies(&self, fields: &FieldValues) -> bool {
        self.when.map(|predicate| predicate(fields)).unwrap_or(true)
    }
}

fn determination_is_other(fields: &FieldValues) -> bool {
    fields.get(field::DETERMINATION_QUESTION) == Some(DeterminationQuestion::Other.token())
}

fn matter_is_urgent(fields: &FieldValues) -> bool {
    fields.get(field::IS_URGENT) == Some(YesNo::Yes.token())
}

/// Prompts for the given screen, in the order the validators check them.
pub fn prompts_for(screen: Screen) -> Vec<FieldPrompt> {
    match screen {
        Screen::Start => vec![
            FieldPrompt::text(field::CLAIM_NUMBER, "Claim number", true),
            FieldPrompt::select(field::REASON, "Reason for request", RequestReason::tokens()),
        ],
        Screen::Cancellation => vec![
            FieldPrompt::text(field::APPOINTMENT_DATE, "Appointment date", true),
            FieldPrompt::select(
                field::CANCELLATION_REASON,
                "Cancellation reason",
                CancellationReason::tokens(),
            ),
            FieldPrompt::select(
                field::RESCHEDULE_NEEDED,
                "Reschedule needed?",
                YesNo::tokens(),
            ),
            FieldPrompt::text(field::ADDITIONAL_INFO, "Additional information", false),
        ],
        Screen::ImeReason => vec![FieldPrompt::select(
            field::REASON,
            "IME reason",
            ImeReason::tokens(),
        )],
        Screen::ClaimDetermination => vec![
            FieldPrompt::select(field::INJURY_TYPE, "Injury type", InjuryType::tokens()),
            FieldPrompt::select(
                field::DETERMINATION_QUESTION,
                "Determination question",
                DeterminationQuestion::tokens(),
            ),
            FieldPrompt::text(field::OTHER_QUESTION, "Other question", true)
                .when(determination_is_other),
        ],
        Screen::Priority => vec![
            FieldPrompt::select(field::IS_URGENT, "Is this matter urgent?", YesNo::tokens()),
            FieldPrompt::text(field::URGENCY_REASON, "Urgency reason", false)
                .when(matter_is_urgent),
        ],
        Screen::SimpleEnd | Screen::Summary => Vec::new(),
    }
}

/// Prints step headings, prompts, and error details for the wizard shell.
pub struct WizardPresenter {
    verbosity: Verbosity,
    header_printed: bool,
}

impl WizardPresenter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            header_printed: false,
        }
    }

    pub fn show_header(&mut self) {
        if self.header_printed {
            return;
        }
        println!("IME Priority Referral");
        println!("Type 'back' to revisit the previous screen, 'exit' to abort.");
        self.header_printed = true;
    }

    pub fn show_screen(&self, screen: Screen, progress: &Progress) {
        println!();
        println!("[{}] {}", progress.label(), screen.title());
        if self.verbosity.is_verbose() {
            println!("Progress: {:.0}%", progress.percent());
        }
    }

    pub fn show_prompt(&self, prompt: &FieldPrompt) {
        let mut line = prompt.label.to_string();
        if prompt.required {
            line.push_str(" *");
        }
        if !prompt.choices.is_empty() {
            line.push_str(&format!(" ({})", prompt.choices.join("/")));
        }
        println!("{}", line);
    }

    pub fn show_choice_error(&self, choices: &[&'static str]) {
        eprintln!("Choose one of: {}", choices.join(", "));
    }

    pub fn show_required_error(&self) {
        eprintln!("A value is required here.");
    }

    pub fn show_validation_error(&self, error: &ValidationError) {
        eprintln!("Invalid input: {}", error);
        if self.verbosity.is_verbose() {
            eprintln!("  Field: {}", error.field);
        }
    }

    pub fn show_no_back(&self) {
        eprintln!("Already at the first screen.");
    }

    pub fn show_recorded(&self, answers: &AnswerLog) {
        if !self.verbosity.is_verbose() || answers.is_empty() {
            return;
        }
        println!("Recorded so far:");
        for (label, value) in answers.iter() {
            if !value.trim().is_empty() {
                println!(" - {}: {}", label, value);
            }
        }
    }
}
