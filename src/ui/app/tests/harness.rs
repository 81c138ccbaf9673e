use crate::ui::app::ReportCardApp;
use eframe::egui;
use egui_kittest::Harness;
use std::sync::{Arc, Mutex};

pub fn setup_harness(app: Arc<Mutex<ReportCardApp>>) -> Harness<'static> {
    let app_clone = app.clone();
    Harness::builder()
        .with_size(egui::vec2(1200.0, 800.0))
        .build(move |ctx: &egui::Context| {
            app_clone.lock().unwrap().render(ctx);
        })
}

pub fn shared(app: ReportCardApp) -> Arc<Mutex<ReportCardApp>> {
    Arc::new(Mutex::new(app))
}
