//! Waitlist wizard state machine.
//!
//! The wizard walks a visitor through `Email -> Name -> Phone -> Socials ->
//! Success`. Every submitted step sends the whole entry collected so far, so
//! the backend always sees the latest cumulative record. The struct is a
//! plain value: it never talks to the network or the console, the landing
//! page does that and feeds the outcome back in.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::api::SubmitError;

/// Ordered wizard stages. Transitions only ever move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Email,
    Name,
    Phone,
    Socials,
    Success,
}

impl Stage {
    pub fn next(self) -> Stage {
        match self {
            Stage::Email => Stage::Name,
            Stage::Name => Stage::Phone,
            Stage::Phone => Stage::Socials,
            Stage::Socials | Stage::Success => Stage::Success,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Stage::Success
    }

    /// Only the optional contact steps offer "Skip this step".
    pub fn is_skippable(self) -> bool {
        matches!(self, Stage::Name | Stage::Phone | Stage::Socials)
    }

    pub fn title(self) -> &'static str {
        match self {
            Stage::Email => "Join the era of zero",
            Stage::Name => "What's your name?",
            Stage::Phone => "Phone number?",
            Stage::Socials => "Social media?",
            Stage::Success => "You're in",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Stage::Email => {
                "Limited alpha spots available. Be the first to transition to autonomous execution."
            }
            Stage::Name => "Step 2 of 4",
            Stage::Phone => "Step 3 of 4 (optional)",
            Stage::Socials => "Step 4 of 4 (optional)",
            Stage::Success => "We've secured your spot. Stay tuned for the transition.",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Stage::Email => "email",
            Stage::Phone => "tel",
            _ => "text",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Stage::Email => "name@company.com",
            Stage::Name => "Full Name",
            Stage::Phone => "Phone Number",
            Stage::Socials => "Twitter / LinkedIn",
            Stage::Success => "",
        }
    }

    pub fn autocomplete(self) -> &'static str {
        match self {
            Stage::Email => "email",
            Stage::Name => "name",
            Stage::Phone => "tel",
            _ => "off",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Stage::Socials => "Complete Profile",
            _ => "Continue",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Email => "email",
            Stage::Name => "name",
            Stage::Phone => "phone",
            Stage::Socials => "socials",
            Stage::Success => "success",
        };
        f.write_str(s)
    }
}

/// Cumulative contact record sent on every step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitlistEntry {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socials: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("a submission is already in flight")]
    Busy,

    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),

    #[error("stage {stage} cannot be skipped")]
    NotSkippable { stage: Stage },

    #[error("the wizard is finished")]
    Finished,

    #[error("no submission is in flight")]
    NotSubmitting,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Drafts {
    email: String,
    name: String,
    phone: String,
    socials: String,
}

/// Per-visit wizard state: current stage, what has been typed, and the
/// loading flag that guards against overlapping submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard {
    stage: Stage,
    drafts: Drafts,
    loading: bool,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            stage: Stage::Email,
            drafts: Drafts::default(),
            loading: false,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn email(&self) -> &str {
        &self.drafts.email
    }

    /// Current draft text for `stage`'s input.
    pub fn field(&self, stage: Stage) -> &str {
        match stage {
            Stage::Email => &self.drafts.email,
            Stage::Name => &self.drafts.name,
            Stage::Phone => &self.drafts.phone,
            Stage::Socials => &self.drafts.socials,
            Stage::Success => "",
        }
    }

    /// Replace the draft for the current stage's input.
    pub fn set_field(&mut self, value: String) -> Result<(), WizardError> {
        if self.loading {
            return Err(WizardError::Busy);
        }
        let slot = match self.stage {
            Stage::Email => &mut self.drafts.email,
            Stage::Name => &mut self.drafts.name,
            Stage::Phone => &mut self.drafts.phone,
            Stage::Socials => &mut self.drafts.socials,
            Stage::Success => return Err(WizardError::Finished),
        };
        *slot = value;
        Ok(())
    }

    /// The entry a submit from the current stage would send.
    ///
    /// Optional fields are included once their step has been reached and the
    /// visitor typed something into them.
    pub fn pending_entry(&self) -> Result<WaitlistEntry, WizardError> {
        if self.stage.is_terminal() {
            return Err(WizardError::Finished);
        }
        let email = self.drafts.email.trim();
        if !is_valid_email(email) {
            return Err(WizardError::InvalidEmail(self.drafts.email.clone()));
        }

        let reached = |stage: Stage, value: &str| {
            let value = value.trim();
            (self.stage >= stage && !value.is_empty()).then(|| value.to_string())
        };

        Ok(WaitlistEntry {
            email: email.to_string(),
            name: reached(Stage::Name, &self.drafts.name),
            phone: reached(Stage::Phone, &self.drafts.phone),
            socials: reached(Stage::Socials, &self.drafts.socials),
        })
    }

    /// Start a submission: raises the loading flag and hands back the entry
    /// to send. The stage does not move until [`Wizard::finish_submit`].
    pub fn begin_submit(&mut self) -> Result<WaitlistEntry, WizardError> {
        if self.loading {
            return Err(WizardError::Busy);
        }
        let entry = self.pending_entry()?;
        self.loading = true;
        Ok(entry)
    }

    /// Settle the in-flight submission. Success advances one stage, failure
    /// keeps the visitor where they are. Either way loading is cleared.
    pub fn finish_submit(&mut self, outcome: &Result<(), SubmitError>) -> Result<Stage, WizardError> {
        if !self.loading {
            return Err(WizardError::NotSubmitting);
        }
        self.loading = false;
        if outcome.is_ok() {
            self.stage = self.stage.next();
        }
        Ok(self.stage)
    }

    /// Advance past an optional step without sending anything.
    pub fn skip(&mut self) -> Result<Stage, WizardError> {
        if self.loading {
            return Err(WizardError::Busy);
        }
        if self.stage.is_terminal() {
            return Err(WizardError::Finished);
        }
        if !self.stage.is_skippable() {
            return Err(WizardError::NotSkippable { stage: self.stage });
        }
        self.stage = self.stage.next();
        Ok(self.stage)
    }
}

/// The browser's `<input type="email">` rule: a local part of letters,
/// digits and ``.!#$%&'*+/=?^_`{|}~-``, then `@`, then dot-separated
/// labels of letters, digits and inner hyphens, at most 63 bytes each.
pub fn is_valid_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c));
    local_ok && !domain.is_empty() && domain.split('.').all(is_domain_label)
}

fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok() -> Result<(), SubmitError> {
        Ok(())
    }

    fn failed() -> Result<(), SubmitError> {
        Err(SubmitError::Remote("boom".to_string()))
    }

    fn wizard_at(stage: Stage) -> Wizard {
        let mut w = Wizard::new();
        w.set_field("a@b.com".to_string()).unwrap();
        while w.stage() < stage {
            w.begin_submit().unwrap();
            w.finish_submit(&ok()).unwrap();
        }
        w
    }

    #[test]
    fn test_stage_order_is_linear() {
        assert_eq!(Stage::Email.next(), Stage::Name);
        assert_eq!(Stage::Name.next(), Stage::Phone);
        assert_eq!(Stage::Phone.next(), Stage::Socials);
        assert_eq!(Stage::Socials.next(), Stage::Success);
        assert_eq!(Stage::Success.next(), Stage::Success);
    }

    #[test]
    fn test_email_submit_sends_only_email_and_advances_on_success() {
        let mut w = Wizard::new();
        w.set_field("a@b.com".to_string()).unwrap();

        let entry = w.begin_submit().unwrap();
        assert_eq!(
            entry,
            WaitlistEntry {
                email: "a@b.com".to_string(),
                name: None,
                phone: None,
                socials: None,
            }
        );
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            serde_json::json!({ "email": "a@b.com" })
        );

        // Nothing moves until the call resolves.
        assert!(w.is_loading());
        assert_eq!(w.stage(), Stage::Email);

        assert_eq!(w.finish_submit(&ok()), Ok(Stage::Name));
        assert!(!w.is_loading());
    }

    #[test]
    fn test_second_submit_while_loading_is_rejected() {
        let mut w = Wizard::new();
        w.set_field("a@b.com".to_string()).unwrap();
        w.begin_submit().unwrap();

        assert_eq!(w.begin_submit(), Err(WizardError::Busy));
        assert_eq!(w.skip(), Err(WizardError::Busy));
        assert_eq!(w.set_field("x".to_string()), Err(WizardError::Busy));
    }

    #[test]
    fn test_failure_keeps_stage_and_clears_loading() {
        let mut w = wizard_at(Stage::Name);
        w.set_field("Ada".to_string()).unwrap();
        w.begin_submit().unwrap();

        assert_eq!(w.finish_submit(&failed()), Ok(Stage::Name));
        assert!(!w.is_loading());

        // The visitor can try again by hand.
        assert!(w.begin_submit().is_ok());
    }

    #[test]
    fn test_entry_is_cumulative() {
        let mut w = wizard_at(Stage::Name);
        w.set_field("Ada Lovelace".to_string()).unwrap();
        w.begin_submit().unwrap();
        w.finish_submit(&ok()).unwrap();

        w.set_field("+1 555 0100".to_string()).unwrap();
        let entry = w.begin_submit().unwrap();
        assert_eq!(entry.email, "a@b.com");
        assert_eq!(entry.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(entry.phone.as_deref(), Some("+1 555 0100"));
        assert_eq!(entry.socials, None);
    }

    #[test]
    fn test_skipped_steps_are_left_out() {
        let mut w = wizard_at(Stage::Name);
        assert_eq!(w.skip(), Ok(Stage::Phone));
        assert_eq!(w.skip(), Ok(Stage::Socials));

        w.set_field("@ada".to_string()).unwrap();
        let entry = w.begin_submit().unwrap();
        assert_eq!(entry.name, None);
        assert_eq!(entry.phone, None);
        assert_eq!(entry.socials.as_deref(), Some("@ada"));
    }

    #[test]
    fn test_skip_from_socials_finishes_without_an_entry() {
        let mut w = wizard_at(Stage::Socials);
        assert!(!w.is_loading());
        assert_eq!(w.skip(), Ok(Stage::Success));
        assert!(!w.is_loading());
        assert_eq!(w.email(), "a@b.com");
    }

    #[test]
    fn test_email_step_cannot_be_skipped() {
        let mut w = Wizard::new();
        assert_eq!(w.skip(), Err(WizardError::NotSkippable { stage: Stage::Email }));
        assert_eq!(w.stage(), Stage::Email);
    }

    #[test]
    fn test_success_is_terminal() {
        let mut w = wizard_at(Stage::Success);
        assert_eq!(w.begin_submit(), Err(WizardError::Finished));
        assert_eq!(w.skip(), Err(WizardError::Finished));
        assert_eq!(w.set_field("late".to_string()), Err(WizardError::Finished));
        assert_eq!(w.stage(), Stage::Success);
    }

    #[test]
    fn test_invalid_email_never_starts_a_submission() {
        let mut w = Wizard::new();
        w.set_field("not-an-email".to_string()).unwrap();
        assert!(matches!(w.begin_submit(), Err(WizardError::InvalidEmail(_))));
        assert!(!w.is_loading());
    }

    #[test]
    fn test_finish_without_start_is_rejected() {
        let mut w = Wizard::new();
        assert_eq!(w.finish_submit(&ok()), Err(WizardError::NotSubmitting));
        assert_eq!(w.stage(), Stage::Email);
    }

    #[test]
    fn test_email_is_trimmed_before_sending() {
        let mut w = Wizard::new();
        w.set_field("  a@b.com ".to_string()).unwrap();
        assert_eq!(w.begin_submit().unwrap().email, "a@b.com");
    }

    #[test]
    fn test_is_valid_email() {
        for good in ["a@b.com", "first.last+tag@sub.example.org", "x@localhost"] {
            assert!(is_valid_email(good), "{good} should be accepted");
        }
        for bad in ["", "plain", "@b.com", "a@", "a@@b.com", "a b@c.com", "a@b..com", "a@.com"] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_email_rejects_characters_browsers_refuse() {
        for bad in ["a<b@c.com", "ü@b.com", "\"x\"@b.com", "a@b_c.com", "a@-b.com", "a@b-.com"] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
        let long_label = format!("a@{}.com", "x".repeat(64));
        assert!(!is_valid_email(&long_label));
        assert!(is_valid_email("o'brien+news@mail-1.example.co"));
    }

    #[test]
    fn test_skippable_stages() {
        assert!(!Stage::Email.is_skippable());
        assert!(Stage::Name.is_skippable());
        assert!(Stage::Phone.is_skippable());
        assert!(Stage::Socials.is_skippable());
        assert!(!Stage::Success.is_skippable());
    }
}
