//! Common types and data structures

use std::fmt;

/// Gender choices offered by the dropdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Payment methods rendered as a single-select list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    PayPal,
    Upi,
    NetBanking,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::CreditCard,
        PaymentMethod::PayPal,
        PaymentMethod::Upi,
        PaymentMethod::NetBanking,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::NetBanking => "Net Banking",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Entries of the avatar action menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoAction {
    Upload,
    TakePhoto,
    Cancel,
}

impl PhotoAction {
    pub const ALL: [PhotoAction; 3] = [PhotoAction::Upload, PhotoAction::TakePhoto, PhotoAction::Cancel];

    pub fn label(self) -> &'static str {
        match self {
            PhotoAction::Upload => "Upload Photo",
            PhotoAction::TakePhoto => "Take Photo",
            PhotoAction::Cancel => "Cancel",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PhotoAction::Upload => egui_phosphor::regular::UPLOAD_SIMPLE,
            PhotoAction::TakePhoto => egui_phosphor::regular::CAMERA,
            PhotoAction::Cancel => egui_phosphor::regular::X,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_labels_in_display_order() {
        let labels: Vec<&str> = Gender::ALL.iter().map(|g| g.label()).collect();
        assert_eq!(labels, ["Male", "Female", "Other"]);
        assert_eq!(Gender::default(), Gender::Male);
    }

    #[test]
    fn test_payment_method_labels_in_display_order() {
        let labels: Vec<String> = PaymentMethod::ALL.iter().map(|m| m.to_string()).collect();
        assert_eq!(labels, ["Credit Card", "PayPal", "UPI", "Net Banking"]);
        assert_eq!(PaymentMethod::default(), PaymentMethod::CreditCard);
    }

    #[test]
    fn test_photo_action_labels() {
        let labels: Vec<&str> = PhotoAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, ["Upload Photo", "Take Photo", "Cancel"]);
    }
}
