use eframe::egui;

use crate::application::chart::chart_spec;
use crate::domain::{ReportSummary, Route, SessionId};
use crate::ui::components::action_button::action_button;
use crate::ui::components::bar_chart::bar_chart;
use crate::ui::components::report_card::report_card;
use crate::ui::components::status::busy_indicator;
use crate::ui::{spacing, theme, typography};

pub const LOADING_TEXT: &str = "Loading reports…";
pub const EMPTY_TITLE: &str = "No reports yet";
pub const EMPTY_TEXT: &str = "Complete a practice dialogue to see your first report card.";
pub const START_PRACTICE_LABEL: &str = "Start practicing";

/// Card widths below which the grid drops a column.
const TWO_COLUMN_MIN_WIDTH: f32 = 600.0;
const THREE_COLUMN_MIN_WIDTH: f32 = 900.0;

/// The three mutually exclusive renderings of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionState {
    Loading,
    Empty,
    Populated,
}

pub fn collection_state(reports: &[ReportSummary], loading: bool) -> CollectionState {
    if loading {
        CollectionState::Loading
    } else if reports.is_empty() {
        CollectionState::Empty
    } else {
        CollectionState::Populated
    }
}

pub fn grid_columns(available_width: f32) -> usize {
    if available_width >= THREE_COLUMN_MIN_WIDTH {
        3
    } else if available_width >= TWO_COLUMN_MIN_WIDTH {
        2
    } else {
        1
    }
}

/// Renders the report collection: a spinner, the empty state, or chart + card grid.
///
/// `on_select` fires with the session id of an activated card; `navigate`
/// fires when the empty state's call to action is used.
pub fn report_collection(
    ui: &mut egui::Ui,
    reports: &[ReportSummary],
    loading: bool,
    on_select: &mut dyn FnMut(&SessionId),
    navigate: &mut dyn FnMut(Route),
) {
    match collection_state(reports, loading) {
        CollectionState::Loading => busy_indicator(ui, LOADING_TEXT),
        CollectionState::Empty => empty_state(ui, navigate),
        CollectionState::Populated => {
            bar_chart(ui, "report_scores_chart", &chart_spec(reports));
            ui.add_space(spacing::SPACING_XL);
            card_grid(ui, reports, on_select);
        }
    }
}

fn empty_state(ui: &mut egui::Ui, navigate: &mut dyn FnMut(Route)) {
    let theme = theme::current_theme();
    ui.vertical_centered(|ui| {
        ui.add_space(spacing::SPACING_XL);
        ui.label(typography::h2(EMPTY_TITLE).color(theme.text_primary));
        ui.add_space(spacing::SPACING_SM);
        ui.label(typography::label(EMPTY_TEXT).color(theme.text_muted));
        ui.add_space(spacing::SPACING_LG);
        if action_button(ui, START_PRACTICE_LABEL, true, theme.brand).clicked() {
            navigate(Route::Practice);
        }
    });
}

fn card_grid(
    ui: &mut egui::Ui,
    reports: &[ReportSummary],
    on_select: &mut dyn FnMut(&SessionId),
) {
    let columns = grid_columns(ui.available_width());

    for (row_index, row) in reports.chunks(columns).enumerate() {
        ui.columns(columns, |cols| {
            for (col_index, report) in row.iter().enumerate() {
                let ordinal = row_index * columns + col_index;
                report_card(&mut cols[col_index], report, ordinal, on_select);
            }
        });
        ui.add_space(spacing::GRID_GAP);
    }
}
