use crate::ui::app::ReportCardApp;
use crate::ui::app::state::AppView;
use crate::ui::app::store::{Action, NavigationAction};
use crate::ui::{icons, spacing, theme, typography};
use eframe::egui;

pub const APP_TITLE: &str = "ReportCard";

const TABS: [(AppView, &str, &str); 2] = [
    (AppView::Dashboard, "Dashboard", icons::VIEW_DASHBOARD),
    (AppView::Profile, "Profile", icons::VIEW_PROFILE),
];

const TAB_WIDTH: f32 = 116.0;
const TAB_HEIGHT: f32 = 26.0;

impl ReportCardApp {
    pub(super) fn render_header(&mut self, ctx: &egui::Context) {
        let theme = theme::current_theme();

        egui::TopBottomPanel::top("header")
            .exact_height(52.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.add_space(spacing::SPACING_SM);
                    ui.label(typography::bold(APP_TITLE).size(14.0).color(theme.text_primary));
                    ui.add_space(spacing::SPACING_XL);

                    egui::Frame::default()
                        .fill(theme.bg_secondary)
                        .stroke(egui::Stroke::new(1.0, theme.border))
                        .corner_radius(egui::CornerRadius::same(spacing::RADIUS_MD))
                        .inner_margin(egui::Margin::symmetric(6, 4))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.spacing_mut().item_spacing.x = 4.0;
                                for (view, label, icon) in TABS {
                                    self.render_tab(ui, view, label, icon);
                                }
                            });
                        });
                });
            });
    }

    fn render_tab(&mut self, ui: &mut egui::Ui, view: AppView, label: &str, icon: &str) {
        let is_active = self.state.ui.current_view() == view;
        let theme = theme::current_theme();

        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(TAB_WIDTH, TAB_HEIGHT), egui::Sense::click());

        response.widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::Button, true, label));

        if response.clicked() {
            self.dispatch(Action::Navigation(NavigationAction::NavigateTo(view.route())));
        }

        let text_color = if is_active {
            theme.brand
        } else if response.hovered() {
            theme.text_primary
        } else {
            theme.text_secondary
        };

        if is_active {
            ui.painter().rect_filled(
                rect,
                egui::CornerRadius::same(spacing::RADIUS_MD),
                theme.bg_muted,
            );
        }

        let painter = ui.painter();
        let icon_pos = egui::pos2(rect.min.x + 10.0, rect.center().y);
        let icon_rect = painter.text(
            icon_pos,
            egui::Align2::LEFT_CENTER,
            icon,
            typography::body_font(14.0),
            text_color,
        );
        painter.text(
            egui::pos2(icon_rect.max.x + 6.0, rect.center().y),
            egui::Align2::LEFT_CENTER,
            label,
            typography::body_font(13.0),
            text_color,
        );
    }
}
