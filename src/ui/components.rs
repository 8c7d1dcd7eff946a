//! Reusable UI components
//!
//! Standalone widgets with no state of their own. Callers pass in what to
//! show and react to the returned `egui::Response`.

use crate::form::FormState;
use crate::theme;
use crate::types::PaymentMethod;
use eframe::egui;

/// One row of a single-select list: ring indicator plus label.
///
/// Purely presentational. Selection truth lives with the caller; react to
/// `clicked()` on the response to activate the option.
pub struct SelectableOption<'a> {
    label: &'a str,
    is_selected: bool,
}

impl<'a> SelectableOption<'a> {
    pub fn new(label: &'a str, is_selected: bool) -> Self {
        Self { label, is_selected }
    }
}

impl egui::Widget for SelectableOption<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), theme::OPTION_ROW_HEIGHT),
            egui::Sense::click(),
        );
        response.widget_info(|| {
            egui::WidgetInfo::selected(egui::WidgetType::RadioButton, true, self.is_selected, self.label)
        });

        if ui.is_rect_visible(rect) {
            if response.hovered() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
            let painter = ui.painter();

            let bg = if self.is_selected {
                theme::OPTION_SELECTED
            } else if response.hovered() {
                theme::BG_HOVER_SUBTLE
            } else {
                egui::Color32::TRANSPARENT
            };
            painter.rect_filled(rect, theme::RADIUS_LARGE, bg);

            let center = egui::pos2(
                rect.min.x + theme::SPACING_MD + theme::OPTION_INDICATOR_RADIUS,
                rect.center().y,
            );
            if self.is_selected {
                painter.circle_stroke(
                    center,
                    theme::OPTION_INDICATOR_RADIUS,
                    egui::Stroke::new(theme::STROKE_THICK, theme::ACCENT),
                );
                painter.circle_filled(center, theme::OPTION_INDICATOR_RADIUS * 0.5, theme::ACCENT);
            } else {
                painter.circle_stroke(
                    center,
                    theme::OPTION_INDICATOR_RADIUS,
                    egui::Stroke::new(theme::STROKE_MEDIUM, theme::TEXT_DIM),
                );
            }

            painter.text(
                egui::pos2(center.x + theme::OPTION_INDICATOR_RADIUS + theme::SPACING_MD, rect.center().y),
                egui::Align2::LEFT_CENTER,
                self.label,
                egui::FontId::proportional(theme::FONT_BODY),
                if self.is_selected { theme::TEXT_PRIMARY } else { theme::TEXT_SECONDARY },
            );
        }

        response
    }
}

/// Payment methods in display order, each paired with whether it is the
/// current selection.
pub fn payment_options(state: &FormState) -> Vec<(PaymentMethod, bool)> {
    PaymentMethod::ALL
        .iter()
        .map(|&method| (method, method == state.payment_method))
        .collect()
}

/// Circular avatar placeholder showing a person glyph. Clickable.
pub fn avatar_placeholder(ui: &mut egui::Ui, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        let painter = ui.painter();
        let fill = theme::interactive_fill(&response, theme::BG_SURFACE);
        painter.circle_filled(rect.center(), size / 2.0, fill);
        painter.circle_stroke(
            rect.center(),
            size / 2.0,
            egui::Stroke::new(theme::STROKE_MEDIUM, theme::BORDER_DEFAULT),
        );
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            egui_phosphor::regular::USER,
            egui::FontId::proportional(size * 0.55),
            theme::TEXT_MUTED,
        );
    }

    response.on_hover_text("Change photo")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormEvent;
    use chrono::NaiveDate;

    fn selected_count(state: &FormState) -> usize {
        payment_options(state).iter().filter(|(_, selected)| *selected).count()
    }

    #[test]
    fn test_default_selection_is_credit_card() {
        let state = FormState::new(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        let options = payment_options(&state);
        assert_eq!(options.len(), 4);
        assert_eq!(options[0], (PaymentMethod::CreditCard, true));
        assert_eq!(selected_count(&state), 1);
    }

    #[test]
    fn test_exactly_one_option_selected_after_each_tap() {
        let mut state = FormState::new(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        for method in [
            PaymentMethod::NetBanking,
            PaymentMethod::PayPal,
            PaymentMethod::PayPal,
            PaymentMethod::Upi,
        ] {
            state.apply(FormEvent::PaymentMethodSelected(method));
            assert_eq!(selected_count(&state), 1);
            let selected: Vec<PaymentMethod> = payment_options(&state)
                .into_iter()
                .filter(|(_, s)| *s)
                .map(|(m, _)| m)
                .collect();
            assert_eq!(selected, [method]);
        }
    }

    #[test]
    fn test_option_order_is_stable() {
        let mut state = FormState::new(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        state.apply(FormEvent::PaymentMethodSelected(PaymentMethod::Upi));
        let order: Vec<PaymentMethod> = payment_options(&state).into_iter().map(|(m, _)| m).collect();
        assert_eq!(order, PaymentMethod::ALL);
    }
}
