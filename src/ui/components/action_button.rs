use eframe::egui;

use crate::ui::{spacing, theme};

/// Filled call-to-action button.
pub fn action_button(
    ui: &mut egui::Ui,
    label: &str,
    enabled: bool,
    color_if_enabled: egui::Color32,
) -> egui::Response {
    let theme = theme::current_theme();
    let button_text = egui::RichText::new(label).size(14.0).color(if enabled {
        theme.brand_fg
    } else {
        theme.text_disabled
    });

    let fill_color = if enabled {
        color_if_enabled
    } else {
        theme.bg_muted
    };

    let old_padding = ui.spacing().button_padding;
    ui.spacing_mut().button_padding =
        egui::vec2(spacing::BUTTON_PADDING.0, spacing::BUTTON_PADDING.1);

    let button = egui::Button::new(button_text)
        .fill(fill_color)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .corner_radius(egui::CornerRadius::same(spacing::RADIUS_MD))
        .min_size(egui::vec2(140.0, 32.0));

    let resp = ui.add_enabled(enabled, button);
    ui.spacing_mut().button_padding = old_padding;

    resp.on_hover_cursor(egui::CursorIcon::PointingHand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui_kittest::Harness;
    use egui_kittest::kittest::Queryable;
    use std::cell::Cell;

    #[test]
    fn click_reports_through_response() {
        let clicks = Cell::new(0);
        let mut harness = Harness::new_ui(|ui| {
            if action_button(ui, "Go", true, egui::Color32::BLUE).clicked() {
                clicks.set(clicks.get() + 1);
            }
        });
        harness.run();
        harness.get_by_label("Go").click();
        harness.run();
        assert_eq!(clicks.get(), 1);
    }
}
