use crate::SettingsDelta;

/// Side effects requested by the update function, executed by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Persist the changed settings field(s), best effort. Carries only what
    /// actually changed, never the full settings struct.
    PersistSettings(SettingsDelta),
    /// Drop the scroll-lock style overrides applied to the host page on entry.
    ReleasePageStyles,
}
