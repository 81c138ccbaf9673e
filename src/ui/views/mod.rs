//! Routed screens, one `impl ReportCardApp` block per route.

pub mod dashboard;
pub mod practice;
pub mod profile;
pub mod report_detail;

use eframe::egui;

use crate::ui::spacing;

/// Horizontal page margin shared by every screen.
pub(crate) fn page_frame() -> egui::Frame {
    egui::Frame::NONE.inner_margin(egui::Margin::symmetric(
        spacing::SPACING_XL as i8,
        spacing::SPACING_SM as i8,
    ))
}
