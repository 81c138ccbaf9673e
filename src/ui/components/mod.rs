pub mod action_button;
pub mod badge;
pub mod bar_chart;
pub mod report_card;
pub mod report_collection;
pub mod status;

pub use report_card::report_card;
pub use report_collection::report_collection;
