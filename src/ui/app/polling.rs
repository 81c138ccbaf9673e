use super::ReportCardApp;

impl ReportCardApp {
    /// Feeds finished background work back through the reducer.
    pub fn poll_action_messages(&mut self) -> bool {
        let mut any = false;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            any = true;
        }
        any
    }
}
