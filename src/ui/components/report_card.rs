//! Card for a single report summary.
//!
//! The card is a pure function of `(report, ordinal)`: its widget id derives
//! from those inputs and it keeps nothing in egui memory, so identical props
//! always produce an identical widget tree.

use eframe::egui;
use std::sync::Arc;

use crate::domain::{ReportSummary, SessionId, Tier};
use crate::ui::components::badge::badge;
use crate::ui::theme::{Theme, current_theme};
use crate::ui::{icons, spacing, typography};

pub const SCORE_SUFFIX: &str = "/100";

/// Feedback is clipped to this many wrapped rows.
pub const FEEDBACK_MAX_ROWS: usize = 3;

const FEEDBACK_FONT_SIZE: f32 = 13.0;

pub fn card_heading(ordinal: usize) -> String {
    format!("Report #{}", ordinal + 1)
}

/// Accessible name of the clickable card surface.
pub fn card_action_label(ordinal: usize) -> String {
    format!("Open {}", card_heading(ordinal))
}

/// Everything the card derives from the score, resolved once per render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVisuals {
    pub score: i64,
    pub tier: Tier,
    pub badge_color: egui::Color32,
    pub bar_color: egui::Color32,
    pub progress: f32,
    pub icon: &'static str,
}

impl CardVisuals {
    pub fn for_report(report: &ReportSummary, theme: &Theme) -> Self {
        let tier = report.tier();
        let color = theme.tier_color(tier);
        Self {
            score: report.score(),
            tier,
            badge_color: color,
            bar_color: color,
            progress: report.progress(),
            icon: icons::tier_icon(tier),
        }
    }
}

pub fn report_card(
    ui: &mut egui::Ui,
    report: &ReportSummary,
    ordinal: usize,
    on_select: &mut dyn FnMut(&SessionId),
) -> egui::Response {
    let theme = current_theme();
    let visuals = CardVisuals::for_report(report, &theme);
    let heading = card_heading(ordinal);

    let frame = egui::Frame::NONE
        .fill(theme.bg_card)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .corner_radius(egui::CornerRadius::same(spacing::RADIUS_LG))
        .inner_margin(egui::Margin::same(spacing::SPACING_LG as i8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.label(typography::bold_label(heading.as_str()).color(theme.text_primary));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    badge(
                        ui,
                        &format!("{} {}", visuals.icon, visuals.tier.label()),
                        visuals.badge_color,
                    );
                });
            });

            ui.add_space(spacing::SPACING_SM);

            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 2.0;
                ui.label(typography::h1(visuals.score.to_string()).color(theme.text_primary));
                ui.label(typography::label(SCORE_SUFFIX).color(theme.text_muted));
            });

            ui.add_space(spacing::SPACING_XS);
            ui.add(
                egui::ProgressBar::new(visuals.progress)
                    .fill(visuals.bar_color)
                    .desired_height(6.0),
            );
            ui.add_space(spacing::SPACING_SM);

            feedback_text(ui, report.feedback_text(), theme.text_secondary);
        });

    // Registered after the contents so the whole card surface takes the click.
    let id = ui
        .id()
        .with(("report_card", report.session_id.as_str(), ordinal));
    let response = ui.interact(frame.response.rect, id, egui::Sense::click());
    let action_label = card_action_label(ordinal);
    response.widget_info(|| {
        egui::WidgetInfo::labeled(egui::WidgetType::Button, true, action_label.as_str())
    });

    if response.clicked() {
        on_select(&report.session_id);
    }

    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

pub fn feedback_job(text: &str, max_width: f32, color: egui::Color32) -> egui::text::LayoutJob {
    let mut job = egui::text::LayoutJob::single_section(
        text.to_owned(),
        egui::TextFormat {
            font_id: typography::body_font(FEEDBACK_FONT_SIZE),
            color,
            ..Default::default()
        },
    );
    job.wrap.max_width = max_width;
    job.wrap.max_rows = FEEDBACK_MAX_ROWS;
    job.wrap.break_anywhere = false;
    job
}

/// Paints the feedback clipped to [`FEEDBACK_MAX_ROWS`]; the accessible label keeps the full text.
fn feedback_text(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    let job = feedback_job(text, ui.available_width(), color);
    let galley: Arc<egui::Galley> = ui.fonts(|fonts| fonts.layout_job(job));
    let (rect, response) = ui.allocate_exact_size(galley.size(), egui::Sense::hover());
    ui.painter().galley(rect.min, galley, color);
    response.widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::Label, true, text));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FEEDBACK_PLACEHOLDER;
    use egui_kittest::Harness;
    use egui_kittest::kittest::Queryable;
    use std::cell::RefCell;

    fn render_once(report: ReportSummary, ordinal: usize) -> Harness<'static> {
        let mut harness = Harness::new_ui(move |ui| {
            report_card(ui, &report, ordinal, &mut |_: &SessionId| {});
        });
        harness.run();
        harness
    }

    #[test]
    fn heading_is_one_based() {
        let harness = render_once(ReportSummary::new("a", Some(85)), 0);
        harness.get_by_label("Report #1");
        harness.get_by_label("Open Report #1");
    }

    #[test]
    fn shows_score_with_suffix() {
        let harness = render_once(ReportSummary::new("a", Some(85)), 4);
        harness.get_by_label("Report #5");
        harness.get_by_label("85");
        harness.get_by_label("/100");
    }

    #[test]
    fn missing_score_shows_zero() {
        let report = ReportSummary::new("a", None);
        let visuals = CardVisuals::for_report(&report, &Theme::mocha());
        assert_eq!(visuals.score, 0);
        assert_eq!(visuals.progress, 0.0);

        let harness = render_once(report, 0);
        harness.get_by_label("0");
    }

    #[test]
    fn missing_feedback_shows_placeholder() {
        let harness = render_once(ReportSummary::new("a", Some(50)), 0);
        harness.get_by_label(FEEDBACK_PLACEHOLDER);
    }

    #[test]
    fn long_feedback_keeps_full_text() {
        let text = "Great structure. ".repeat(40);
        let harness = render_once(
            ReportSummary::new("a", Some(50)).with_feedback(text.clone()),
            0,
        );
        harness.get_by_label(&text);
    }

    #[test]
    fn long_feedback_is_clipped_to_three_rows() {
        let ctx = egui::Context::default();
        let text = "Great structure and clear turn taking. ".repeat(30);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            let galley =
                ctx.fonts(|f| f.layout_job(feedback_job(&text, 200.0, egui::Color32::WHITE)));
            assert!(galley.rows.len() <= FEEDBACK_MAX_ROWS);
            assert!(galley.elided);
        });
    }

    #[test]
    fn badge_and_bar_share_tier_color() {
        let theme = Theme::mocha();
        for score in [0, 39, 40, 69, 70, 100] {
            let report = ReportSummary::new("a", Some(score));
            let visuals = CardVisuals::for_report(&report, &theme);
            assert_eq!(visuals.badge_color, visuals.bar_color, "score {score}");
            assert_eq!(visuals.badge_color, theme.tier_color(visuals.tier));
        }
        assert_eq!(
            CardVisuals::for_report(&ReportSummary::new("a", Some(85)), &theme).tier,
            Tier::Positive
        );
    }

    #[test]
    fn click_selects_session_once() {
        let selected = RefCell::new(Vec::new());
        let report = ReportSummary::new("session-42", Some(72));
        let mut harness = Harness::new_ui(|ui| {
            report_card(ui, &report, 1, &mut |id: &SessionId| {
                selected.borrow_mut().push(id.clone())
            });
        });
        harness.run();

        harness.get_by_label("Open Report #2").click();
        harness.run();

        assert_eq!(*selected.borrow(), vec![SessionId::new("session-42")]);
    }

    #[test]
    fn rendering_without_clicks_selects_nothing() {
        let selected = RefCell::new(Vec::<SessionId>::new());
        let report = ReportSummary::new("a", Some(10));
        let mut harness = Harness::new_ui(|ui| {
            report_card(ui, &report, 0, &mut |id: &SessionId| {
                selected.borrow_mut().push(id.clone())
            });
        });
        harness.run();
        harness.run();
        assert!(selected.borrow().is_empty());
    }

    #[test]
    fn identical_props_render_identical_rects() {
        let rects = RefCell::new(Vec::new());
        let report = ReportSummary::new("a", Some(55)).with_feedback("Steady");
        let mut harness = Harness::new_ui(|ui| {
            let response = report_card(ui, &report, 0, &mut |_: &SessionId| {});
            rects.borrow_mut().push((response.id, response.rect));
        });
        harness.run();
        harness.run();

        let rects = rects.borrow();
        assert!(rects.len() >= 2);
        assert!(rects.windows(2).all(|w| w[0] == w[1]));
    }
}
