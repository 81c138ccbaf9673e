use eframe::egui;

use crate::ui::spacing;

/// Rounded pill with a tinted background and a solid foreground.
pub fn badge(ui: &mut egui::Ui, text: &str, color: egui::Color32) -> egui::Response {
    egui::Frame::NONE
        .fill(color.gamma_multiply(0.2))
        .stroke(egui::Stroke::new(1.0, color.gamma_multiply(0.5)))
        .corner_radius(egui::CornerRadius::same(255))
        .inner_margin(egui::Margin::symmetric(
            spacing::SPACING_SM as i8,
            spacing::SPACING_XS as i8,
        ))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(11.0).color(color));
        })
        .response
}
