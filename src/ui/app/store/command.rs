#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    LoadReports { generation: u64 },
    FetchProfile { generation: u64 },
}
