use eframe::egui;

use crate::ui::spacing;
use crate::ui::theme;

/// Spinner with a caption.
pub fn busy_indicator(ui: &mut egui::Ui, caption: &str) {
    let theme = theme::current_theme();
    ui.horizontal(|ui| {
        ui.spinner();
        ui.add_space(spacing::SPACING_SM);
        ui.label(egui::RichText::new(caption).color(theme.text_muted));
    });
}

/// Error strip with an optional retry button. Returns true when retry was clicked.
pub fn error_banner(ui: &mut egui::Ui, title: &str, detail: &str, retry: bool) -> bool {
    let theme = theme::current_theme();
    let mut retry_clicked = false;
    egui::Frame::new()
        .fill(theme.destructive.gamma_multiply(0.2))
        .corner_radius(egui::CornerRadius::same(spacing::RADIUS_MD))
        .inner_margin(egui::Margin::symmetric(
            spacing::SPACING_MD as i8,
            spacing::SPACING_SM as i8,
        ))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(title).color(theme.destructive));
                ui.label(egui::RichText::new(detail).color(theme.text_primary));
                if retry {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        retry_clicked = ui.button("Retry").clicked();
                    });
                }
            });
        });
    retry_clicked
}
