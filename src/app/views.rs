//! Form view rendering
//!
//! `render_form` reads `FormState` and reports what the user did as
//! `FormEvent`s. It never writes to the state; edits are made on local copies
//! and handed back through the event list.

use crate::form::{FormEvent, FormState};
use crate::theme;
use crate::types::Gender;
use crate::ui::components::{avatar_placeholder, payment_options, SelectableOption};
use eframe::egui;

pub(crate) fn render_form(ui: &mut egui::Ui, form: &FormState, events: &mut Vec<FormEvent>) {
    // Avatar
    ui.vertical_centered(|ui| {
        if avatar_placeholder(ui, theme::AVATAR_SIZE).clicked() {
            events.push(FormEvent::AvatarTapped);
        }
    });
    ui.add_space(theme::SPACING_MD);

    // Username & Email
    let mut username = form.username.clone();
    if ui
        .add(
            egui::TextEdit::singleline(&mut username)
                .hint_text("Username")
                .desired_width(f32::INFINITY)
                .margin(egui::Margin::symmetric(8, 6)),
        )
        .changed()
    {
        events.push(FormEvent::UsernameChanged(username));
    }

    let mut email = form.email.clone();
    if ui
        .add(
            egui::TextEdit::singleline(&mut email)
                .hint_text("Email")
                .desired_width(f32::INFINITY)
                .margin(egui::Margin::symmetric(8, 6)),
        )
        .changed()
    {
        events.push(FormEvent::EmailChanged(email));
    }

    // Date of birth
    ui.horizontal(|ui| {
        theme::field_label(ui, "Date Of Birth");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut birth_date = form.birth_date;
            ui.add(egui_extras::DatePickerButton::new(&mut birth_date).id_salt("birth_date"));
            if birth_date != form.birth_date {
                events.push(FormEvent::BirthDateChanged(birth_date));
            }
        });
    });

    // Gender dropdown
    ui.horizontal(|ui| {
        theme::field_label(ui, "Gender");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut gender = form.gender;
            egui::ComboBox::from_id_salt("gender")
                .selected_text(gender.label())
                .show_ui(ui, |ui| {
                    for option in Gender::ALL {
                        ui.selectable_value(&mut gender, option, option.label());
                    }
                });
            if gender != form.gender {
                events.push(FormEvent::GenderSelected(gender));
            }
        });
    });

    ui.add_space(theme::SPACING_MD);

    // Payment method
    ui.vertical_centered(|ui| {
        theme::section_heading(ui, "Select Payment Method");
    });
    ui.add_space(theme::SPACING_XS);
    ui.scope(|ui| {
        ui.spacing_mut().item_spacing.y = theme::SPACING_XS;
        for (method, is_selected) in payment_options(form) {
            if ui.add(SelectableOption::new(method.label(), is_selected)).clicked() {
                events.push(FormEvent::PaymentMethodSelected(method));
            }
        }
    });

    ui.add_space(theme::SPACING_MD);

    // Bio
    theme::field_label(ui, "Comments:");
    let mut bio = form.bio.clone();
    if ui
        .add(
            egui::TextEdit::multiline(&mut bio)
                .desired_rows(theme::BIO_ROWS)
                .desired_width(f32::INFINITY)
                .margin(egui::Margin::symmetric(8, 6)),
        )
        .changed()
    {
        events.push(FormEvent::BioChanged(bio));
    }

    ui.add_space(theme::SPACING_LG);

    // Register
    ui.vertical_centered(|ui| {
        if ui.add(theme::button_accent("Register")).clicked() {
            events.push(FormEvent::RegisterPressed);
        }
    });
}
