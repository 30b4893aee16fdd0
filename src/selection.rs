use serde::Serialize;

/// Topic and level picked so far in the quiz setup flow.
///
/// Owned by whoever drives the flow. Values are stored as given, without
/// validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub topic: Option<String>,
    pub level: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = Some(topic.into());
    }

    pub fn set_level(&mut self, level: impl Into<String>) {
        self.level = Some(level.into());
    }

    /// Snapshot of both fields.
    pub fn selections(&self) -> SelectionState {
        self.clone()
    }

    pub fn reset(&mut self) {
        self.topic = None;
        self.level = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unset() {
        let state = SelectionState::new();
        assert_eq!(state.topic, None);
        assert_eq!(state.level, None);
    }

    #[test]
    fn set_then_reset() {
        let mut state = SelectionState::new();
        state.set_topic("react");
        state.set_level("advanced");

        assert_eq!(
            state.selections(),
            SelectionState {
                topic: Some("react".to_string()),
                level: Some("advanced".to_string()),
            }
        );

        state.reset();
        assert_eq!(state.selections(), SelectionState::default());
    }

    #[test]
    fn last_write_wins() {
        let mut state = SelectionState::new();
        state.set_topic("html");
        state.set_topic("css");
        state.set_level("whatever");

        let snapshot = state.selections();
        assert_eq!(snapshot.topic.as_deref(), Some("css"));
        assert_eq!(snapshot.level.as_deref(), Some("whatever"));
    }

    #[test]
    fn snapshot_is_detached() {
        let mut state = SelectionState::new();
        state.set_topic("node");
        let snapshot = state.selections();

        state.reset();
        assert_eq!(snapshot.topic.as_deref(), Some("node"));
        assert_eq!(state.topic, None);
    }
}
