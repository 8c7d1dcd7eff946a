//! Modal dialogs (avatar photo options)

use crate::constants::PHOTO_MENU_TITLE;
use crate::form::{FormEvent, FormState};
use crate::theme;
use crate::types::PhotoAction;
use eframe::egui;

/// Action menu shown after tapping the avatar. Every way of leaving the menu
/// (an entry, Escape, clicking the backdrop) emits exactly one `PhotoAction`.
pub(crate) fn render_photo_menu(ctx: &egui::Context, form: &FormState, events: &mut Vec<FormEvent>) {
    if !form.photo_menu_visible {
        return;
    }

    let modal_area = egui::Modal::default_area(egui::Id::new("photo_menu_modal"))
        .default_width(260.0 + theme::SPACING_XL * 2.0);
    let modal = egui::Modal::new(egui::Id::new("photo_menu_modal"))
        .area(modal_area)
        .backdrop_color(egui::Color32::from_black_alpha(160))
        .frame(theme::modal_frame());

    let mut chosen = None;
    let modal_response = modal.show(ctx, |ui| {
        ui.set_min_width(260.0);
        ui.set_max_width(260.0);
        ui.spacing_mut().item_spacing.y = theme::SPACING_XS;

        ui.vertical_centered(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(PHOTO_MENU_TITLE)
                        .size(theme::FONT_LABEL)
                        .color(theme::TEXT_MUTED),
                )
                .selectable(false),
            );
        });
        ui.add_space(theme::SPACING_SM);
        ui.separator();

        for action in PhotoAction::ALL {
            if action == PhotoAction::Cancel {
                ui.separator();
            }
            let color = if action == PhotoAction::Cancel { theme::ACCENT } else { theme::TEXT_SECONDARY };
            if theme::menu_item(ui, action.icon(), action.label(), color) {
                chosen = Some(action);
            }
        }
    });

    if chosen.is_none() && modal_response.should_close() {
        chosen = Some(PhotoAction::Cancel);
    }
    if let Some(action) = chosen {
        events.push(FormEvent::PhotoAction(action));
    }
}
