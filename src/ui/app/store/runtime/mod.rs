pub mod profile;
pub mod reports;


use super::super::ReportCardApp;
use super::command::Command;

pub fn run(app: &mut ReportCardApp, command: Command) {
    match command {
        Command::LoadReports { generation } => reports::load_reports(app, generation),
        Command::FetchProfile { generation } => profile::fetch_profile(app, generation),
    }
}
