use eframe::egui;

use super::ReportCardApp;
use crate::domain::Route;
use crate::ui::spacing;

impl eframe::App for ReportCardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        catppuccin_egui::set_theme(ctx, catppuccin_egui::MOCHA);

        let theme = crate::ui::theme::current_theme();
        let mut visuals = egui::Visuals::dark();

        visuals.panel_fill = theme.bg_primary;
        visuals.window_fill = theme.bg_primary;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, theme.border);
        visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, theme.border);
        visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, theme.brand);
        visuals.widgets.hovered.bg_fill = theme.bg_secondary;
        visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, theme.brand);
        visuals.widgets.active.bg_fill = theme.bg_secondary;

        visuals.selection.bg_fill = theme.brand.gamma_multiply(0.3);
        visuals.selection.stroke = egui::Stroke::new(1.0, theme.brand);

        visuals.window_corner_radius = egui::CornerRadius::same(spacing::RADIUS_LG);
        visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(spacing::RADIUS_MD);
        visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(spacing::RADIUS_MD);
        visuals.widgets.active.corner_radius = egui::CornerRadius::same(spacing::RADIUS_MD);

        ctx.set_visuals(visuals);

        self.render(ctx);
    }
}

impl ReportCardApp {
    /// One frame: drain finished work, then draw header and the routed view.
    pub fn render(&mut self, ctx: &egui::Context) {
        let action_updated = self.poll_action_messages();

        if action_updated || self.state.reports.loading || self.state.profile.state.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        self.render_header(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.add_space(spacing::SPACING_LG);
                    match self.state.ui.route.clone() {
                        Route::Dashboard => self.ui_dashboard(ui),
                        Route::Profile => self.ui_profile(ui),
                        Route::Practice => self.ui_practice(ui),
                        Route::ReportDetail(session_id) => self.ui_report_detail(ui, &session_id),
                    }
                });
        });
    }
}
