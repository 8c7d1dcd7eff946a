//! Form state store and the events that mutate it
//!
//! The view renders from `&FormState` and returns `FormEvent`s; `FormState::apply`
//! is the only place field values change.

use crate::constants::BIO_MAX_LINES;
use crate::types::{Gender, PaymentMethod, PhotoAction};
use chrono::NaiveDate;
use tracing::{debug, info};

/// All values entered on the registration screen. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub username: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub bio: String,
    pub payment_method: PaymentMethod,
    pub photo_menu_visible: bool,
}

/// One user intent emitted by the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    AvatarTapped,
    PhotoAction(PhotoAction),
    UsernameChanged(String),
    EmailChanged(String),
    BirthDateChanged(NaiveDate),
    GenderSelected(Gender),
    PaymentMethodSelected(PaymentMethod),
    BioChanged(String),
    RegisterPressed,
}

impl FormState {
    pub fn new(birth_date: NaiveDate) -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            birth_date,
            gender: Gender::default(),
            bio: String::new(),
            payment_method: PaymentMethod::default(),
            photo_menu_visible: false,
        }
    }

    /// Fresh state with the birth date defaulted to the local calendar date
    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    pub fn apply(&mut self, event: FormEvent) {
        match event {
            FormEvent::AvatarTapped => {
                debug!("Photo menu opened");
                self.photo_menu_visible = true;
            }
            FormEvent::PhotoAction(action) => {
                match action {
                    PhotoAction::Upload | PhotoAction::TakePhoto => {
                        info!(action = action.label(), "Photo action not implemented");
                    }
                    PhotoAction::Cancel => debug!("Photo menu cancelled"),
                }
                self.photo_menu_visible = false;
            }
            FormEvent::UsernameChanged(text) => {
                debug!(field = "username", len = text.chars().count(), "Field edited");
                self.username = text;
            }
            FormEvent::EmailChanged(text) => {
                debug!(field = "email", len = text.chars().count(), "Field edited");
                self.email = text;
            }
            FormEvent::BirthDateChanged(date) => {
                debug!(field = "birth_date", %date, "Field edited");
                self.birth_date = date;
            }
            FormEvent::GenderSelected(gender) => {
                debug!(field = "gender", value = gender.label(), "Field edited");
                self.gender = gender;
            }
            FormEvent::PaymentMethodSelected(method) => {
                debug!(field = "payment_method", value = method.label(), "Field edited");
                self.payment_method = method;
            }
            FormEvent::BioChanged(text) => {
                debug!(field = "bio", len = text.chars().count(), "Field edited");
                self.bio = clamp_lines(text, BIO_MAX_LINES);
            }
            FormEvent::RegisterPressed => {
                info!("Register pressed, submission not implemented");
            }
        }
    }
}

/// Keep only the first `max_lines` `\n`-separated segments of `text`.
/// Line length is not limited.
pub fn clamp_lines(text: String, max_lines: usize) -> String {
    let total = text.split('\n').count();
    if total <= max_lines {
        return text;
    }
    debug!(dropped = total - max_lines, "Clamped extra lines");
    text.split('\n').take(max_lines).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fresh() -> FormState {
        FormState::new(date(2025, 5, 19))
    }

    #[test]
    fn test_initial_state() {
        let state = fresh();
        assert_eq!(state.username, "");
        assert_eq!(state.email, "");
        assert_eq!(state.gender, Gender::Male);
        assert_eq!(state.payment_method, PaymentMethod::CreditCard);
        assert_eq!(state.bio, "");
        assert_eq!(state.birth_date, date(2025, 5, 19));
        assert!(!state.photo_menu_visible);
    }

    #[test]
    fn test_today_uses_local_date() {
        let before = chrono::Local::now().date_naive();
        let state = FormState::today();
        let after = chrono::Local::now().date_naive();
        assert!(state.birth_date == before || state.birth_date == after);
    }

    #[test]
    fn test_text_fields_are_stored_verbatim() {
        let mut state = fresh();
        for s in ["", "  padded  ", "not-an-email", "ünïcödé 名前", "tab\tand\nnewline"] {
            state.apply(FormEvent::UsernameChanged(s.to_string()));
            state.apply(FormEvent::EmailChanged(s.to_string()));
            assert_eq!(state.username, s);
            assert_eq!(state.email, s);
        }
    }

    #[test]
    fn test_username_has_no_length_limit() {
        let mut state = fresh();
        let long = "x".repeat(10_000);
        state.apply(FormEvent::UsernameChanged(long.clone()));
        assert_eq!(state.username, long);
    }

    #[test]
    fn test_birth_date_accepts_future_dates() {
        let mut state = fresh();
        state.apply(FormEvent::BirthDateChanged(date(2999, 12, 31)));
        assert_eq!(state.birth_date, date(2999, 12, 31));
    }

    #[test]
    fn test_gender_selection() {
        let mut state = fresh();
        state.apply(FormEvent::GenderSelected(Gender::Other));
        assert_eq!(state.gender, Gender::Other);
        state.apply(FormEvent::GenderSelected(Gender::Female));
        assert_eq!(state.gender, Gender::Female);
    }

    #[test]
    fn test_payment_method_tracks_latest_selection() {
        let mut state = fresh();
        let sequence = [
            PaymentMethod::Upi,
            PaymentMethod::PayPal,
            PaymentMethod::Upi,
            PaymentMethod::NetBanking,
            PaymentMethod::CreditCard,
        ];
        for method in sequence {
            state.apply(FormEvent::PaymentMethodSelected(method));
            assert_eq!(state.payment_method, method);
        }
    }

    #[test]
    fn test_bio_within_limit_is_verbatim() {
        let mut state = fresh();
        let long_line = "very long line ".repeat(100);
        for s in ["", "one line", "a\nb\nc\nd", "a\n\n\n", long_line.as_str()] {
            state.apply(FormEvent::BioChanged(s.to_string()));
            assert_eq!(state.bio, s);
        }
    }

    #[test]
    fn test_bio_is_clamped_to_four_lines() {
        let mut state = fresh();
        state.apply(FormEvent::BioChanged("a\nb\nc\nd\ne".to_string()));
        assert_eq!(state.bio, "a\nb\nc\nd");

        state.apply(FormEvent::BioChanged("1\n2\n3\n4\n5\n6\n7".to_string()));
        assert_eq!(state.bio, "1\n2\n3\n4");
    }

    #[test]
    fn test_bio_trailing_newline_on_fourth_line_is_stripped() {
        // Pressing Enter at the end of line four starts a fifth, empty segment
        let mut state = fresh();
        state.apply(FormEvent::BioChanged("a\nb\nc\nd\n".to_string()));
        assert_eq!(state.bio, "a\nb\nc\nd");
    }

    #[test]
    fn test_clamp_lines_keeps_carriage_returns() {
        assert_eq!(clamp_lines("a\r\nb\r\nc".to_string(), 2), "a\r\nb\r");
    }

    #[test]
    fn test_avatar_tap_opens_menu_only() {
        let mut state = fresh();
        state.apply(FormEvent::UsernameChanged("sam".to_string()));
        let mut expected = state.clone();
        expected.photo_menu_visible = true;

        state.apply(FormEvent::AvatarTapped);
        assert_eq!(state, expected);
        state.apply(FormEvent::AvatarTapped);
        assert_eq!(state, expected);
    }

    #[test]
    fn test_cancel_closes_menu_only() {
        let mut state = fresh();
        state.apply(FormEvent::EmailChanged("sam@example.com".to_string()));
        state.apply(FormEvent::AvatarTapped);
        let mut expected = state.clone();
        expected.photo_menu_visible = false;

        state.apply(FormEvent::PhotoAction(PhotoAction::Cancel));
        assert_eq!(state, expected);
    }

    #[test]
    fn test_placeholder_photo_actions_close_menu_only() {
        for action in [PhotoAction::Upload, PhotoAction::TakePhoto] {
            let mut state = fresh();
            state.apply(FormEvent::BioChanged("hello".to_string()));
            state.apply(FormEvent::AvatarTapped);
            let mut expected = state.clone();
            expected.photo_menu_visible = false;

            state.apply(FormEvent::PhotoAction(action));
            assert_eq!(state, expected);
        }
    }

    #[test]
    fn test_register_is_a_no_op() {
        let mut state = fresh();
        state.apply(FormEvent::UsernameChanged("sam".to_string()));
        state.apply(FormEvent::PaymentMethodSelected(PaymentMethod::PayPal));
        state.apply(FormEvent::AvatarTapped);
        let before = state.clone();

        state.apply(FormEvent::RegisterPressed);
        assert_eq!(state, before);
    }
}
