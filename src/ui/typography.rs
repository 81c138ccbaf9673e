use eframe::egui;

/// Strong proportional text.
pub fn bold(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text).strong()
}

pub fn body(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text).family(egui::FontFamily::Proportional)
}

/// Large bold heading
pub fn h1(text: impl Into<String>) -> egui::RichText {
    bold(text).size(22.0)
}

/// Medium bold heading
pub fn h2(text: impl Into<String>) -> egui::RichText {
    bold(text).size(16.0)
}

pub fn label(text: impl Into<String>) -> egui::RichText {
    body(text).size(13.0)
}

pub fn bold_label(text: impl Into<String>) -> egui::RichText {
    bold(text).size(14.0)
}

pub fn small(text: impl Into<String>) -> egui::RichText {
    body(text).size(11.0)
}

pub fn body_font(size: f32) -> egui::FontId {
    egui::FontId::new(size, egui::FontFamily::Proportional)
}
