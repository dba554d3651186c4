use flagctx_core::Snapshot;
use flagctx_core::flags::ACCESS_GRANTED;

/// Read-only copy of the provider state for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionView {
    pub client_side_id: String,
    pub context_key: String,
    pub role: Option<String>,
    /// `None` when the flag is absent or not a boolean.
    pub access_granted: Option<bool>,
}

impl SessionView {
    pub fn new(client_side_id: impl Into<String>, snapshot: &Snapshot) -> Self {
        let mut view = Self {
            client_side_id: client_side_id.into(),
            ..Self::default()
        };
        view.apply(snapshot);
        view
    }

    pub fn apply(&mut self, snapshot: &Snapshot) {
        self.context_key.clone_from(&snapshot.context.key);
        self.role.clone_from(&snapshot.context.role);
        self.access_granted = snapshot
            .flags
            .get(ACCESS_GRANTED)
            .and_then(flagctx_core::FlagValue::as_bool);
    }
}
