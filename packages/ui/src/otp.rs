//! # OTP verification flow
//!
//! State for the six-digit code screen, independent of rendering.
//!
//! ```text
//! Entering ──(6 digits / submit)──▶ Verifying ──ok──▶ Verified (→ dashboard)
//!    ▲                                  │
//!    └────────────── Failed(msg) ◀──────┘
//! ```
//!
//! Resend is gated by a 60 second cooldown and by an in-flight flag. The email
//! being verified arrives through [`PendingVerification`], a handoff filled in
//! by the signup form and taken once by the OTP screen; it is never persisted.

use dioxus::prelude::*;

pub const OTP_LENGTH: usize = 6;
pub const RESEND_COOLDOWN_SECS: u32 = 60;

pub const CODE_INCOMPLETE: &str = "Please enter a 6-digit code.";

#[derive(Clone, Debug, PartialEq)]
pub enum OtpPhase {
    Entering,
    Verifying,
    Failed(String),
    Verified,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OtpFlow {
    email: String,
    code: String,
    phase: OtpPhase,
    countdown: u32,
    resending: bool,
}

impl OtpFlow {
    /// Start a flow for `email` with the resend cooldown already running.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            code: String::new(),
            phase: OtpPhase::Entering,
            countdown: RESEND_COOLDOWN_SECS,
            resending: false,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn phase(&self) -> &OtpPhase {
        &self.phase
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    pub fn is_verifying(&self) -> bool {
        self.phase == OtpPhase::Verifying
    }

    pub fn is_resending(&self) -> bool {
        self.resending
    }

    pub fn is_complete(&self) -> bool {
        self.code.len() == OTP_LENGTH
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            OtpPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Replace the typed code with the digits of `raw`, capped at six.
    ///
    /// Returns `true` when this input left a complete code that differs from
    /// the previous one, so verification should start automatically.
    pub fn input(&mut self, raw: &str) -> bool {
        let code: String = raw
            .chars()
            .filter(char::is_ascii_digit)
            .take(OTP_LENGTH)
            .collect();
        let changed = code != self.code;
        self.code = code;
        changed && self.is_complete() && !self.is_verifying()
    }

    /// Whether the explicit verify action is enabled.
    pub fn can_submit(&self) -> bool {
        self.is_complete() && !self.is_verifying()
    }

    /// Move to `Verifying` and hand back the code to send.
    pub fn begin_verify(&mut self) -> Result<String, &'static str> {
        if !self.is_complete() {
            return Err(CODE_INCOMPLETE);
        }
        if self.is_verifying() {
            return Err("Verification already in progress.");
        }
        self.phase = OtpPhase::Verifying;
        Ok(self.code.clone())
    }

    /// Back to entry with an error. The typed code is kept.
    pub fn verify_failed(&mut self, message: impl Into<String>) {
        self.phase = OtpPhase::Failed(message.into());
    }

    pub fn verified(&mut self) {
        self.phase = OtpPhase::Verified;
    }

    pub fn can_resend(&self) -> bool {
        self.countdown == 0 && !self.resending
    }

    /// Mark a resend as in flight. Returns `false` when resend is not allowed.
    pub fn begin_resend(&mut self) -> bool {
        if !self.can_resend() {
            return false;
        }
        self.resending = true;
        true
    }

    /// A fresh code was sent: clear the input and restart the cooldown.
    pub fn resend_succeeded(&mut self) {
        self.resending = false;
        self.code.clear();
        self.phase = OtpPhase::Entering;
        self.countdown = RESEND_COOLDOWN_SECS;
    }

    pub fn resend_failed(&mut self) {
        self.resending = false;
    }

    /// Advance the cooldown by one second. Returns `true` while it is still running.
    pub fn tick(&mut self) -> bool {
        self.countdown = self.countdown.saturating_sub(1);
        self.countdown > 0
    }

    pub fn resend_label(&self) -> String {
        if self.countdown > 0 {
            format!("Resend in {}s", self.countdown)
        } else {
            "Resend Code".to_string()
        }
    }
}

/// Email handed from the signup form to the OTP screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PendingVerification {
    email: Option<String>,
}

impl PendingVerification {
    pub fn offer(&mut self, email: impl Into<String>) {
        self.email = Some(email.into());
    }

    /// Consume the handoff. A second call returns `None`.
    pub fn take(&mut self) -> Option<String> {
        self.email.take()
    }
}

pub fn use_pending_verification() -> Signal<PendingVerification> {
    use_context::<Signal<PendingVerification>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_keeps_six_digits() {
        let mut flow = OtpFlow::new("ada@example.com");
        assert!(!flow.input("12a3"));
        assert_eq!(flow.code(), "123");
        assert!(!flow.can_submit());

        // Completing the code triggers auto-verify exactly once
        assert!(flow.input("1234567"));
        assert_eq!(flow.code(), "123456");
        assert!(!flow.input("123456"));
    }

    #[test]
    fn test_new_full_code_after_failure_auto_verifies() {
        let mut flow = OtpFlow::new("ada@example.com");
        assert!(flow.input("111111"));
        flow.begin_verify().unwrap();
        flow.verify_failed("Invalid or expired code");

        // Pasting over the rejected code starts another attempt
        assert!(flow.input("222222"));
        assert_eq!(flow.code(), "222222");

        // Nothing auto-starts while a verification is in flight
        flow.begin_verify().unwrap();
        assert!(!flow.input("333333"));
    }

    #[test]
    fn test_incomplete_code_rejected_locally() {
        let mut flow = OtpFlow::new("ada@example.com");
        flow.input("123");
        assert_eq!(flow.begin_verify(), Err(CODE_INCOMPLETE));
        assert_eq!(flow.phase(), &OtpPhase::Entering);
    }

    #[test]
    fn test_verify_failure_returns_to_entry() {
        let mut flow = OtpFlow::new("ada@example.com");
        flow.input("654321");
        assert_eq!(flow.begin_verify().as_deref(), Ok("654321"));
        assert!(flow.is_verifying());
        assert!(!flow.can_submit());
        assert!(flow.begin_verify().is_err());

        flow.verify_failed("Invalid or expired code");
        assert_eq!(flow.error(), Some("Invalid or expired code"));
        assert_eq!(flow.code(), "654321");
        assert!(flow.can_submit());

        flow.begin_verify().unwrap();
        flow.verified();
        assert_eq!(flow.phase(), &OtpPhase::Verified);
    }

    #[test]
    fn test_resend_gated_by_countdown() {
        let mut flow = OtpFlow::new("ada@example.com");
        assert_eq!(flow.countdown(), RESEND_COOLDOWN_SECS);
        assert!(!flow.can_resend());
        assert!(!flow.begin_resend());
        assert_eq!(flow.resend_label(), "Resend in 60s");

        for _ in 0..RESEND_COOLDOWN_SECS - 1 {
            assert!(flow.tick());
        }
        assert!(!flow.tick());
        assert_eq!(flow.countdown(), 0);
        assert!(!flow.tick());
        assert_eq!(flow.resend_label(), "Resend Code");
        assert!(flow.can_resend());
    }

    #[test]
    fn test_resend_in_flight_and_reset() {
        let mut flow = OtpFlow::new("ada@example.com");
        while flow.tick() {}
        flow.input("111111");

        assert!(flow.begin_resend());
        assert!(!flow.can_resend());
        assert!(!flow.begin_resend());

        flow.resend_succeeded();
        assert_eq!(flow.countdown(), RESEND_COOLDOWN_SECS);
        assert_eq!(flow.code(), "");
        assert!(!flow.can_resend());
    }

    #[test]
    fn test_failed_resend_keeps_cooldown_at_zero() {
        let mut flow = OtpFlow::new("ada@example.com");
        while flow.tick() {}
        assert!(flow.begin_resend());
        flow.resend_failed();
        assert!(flow.can_resend());
        assert_eq!(flow.countdown(), 0);
    }

    #[test]
    fn test_pending_verification_is_taken_once() {
        let mut pending = PendingVerification::default();
        assert_eq!(pending.take(), None);

        pending.offer("ada@example.com");
        assert_eq!(pending.take().as_deref(), Some("ada@example.com"));
        assert_eq!(pending.take(), None);
    }
}
