// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Addressing for the kernel debug channel.

/// `DPFLTR_DEFAULT_ID` from `dpfilter.h`.
pub const DPFLTR_DEFAULT_ID: u32 = 101;
/// `DPFLTR_ERROR_LEVEL`; always shown by the debugger.
pub const DPFLTR_ERROR_LEVEL: u32 = 0;

/// Component id and importance passed with every `DbgPrintEx` call.
///
/// This only addresses the channel. All four severities are sent with the
/// same importance so the debugger's own filter never hides one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugChannelConfig {
    /// Debug filter component id.
    pub component_id: u32,
    /// Debug filter importance level.
    pub level: u32,
}

impl DebugChannelConfig {
    /// Default component with error importance.
    pub const DEFAULT: Self = Self {
        component_id: DPFLTR_DEFAULT_ID,
        level: DPFLTR_ERROR_LEVEL,
    };

    /// Channel for a specific filter component, keeping error importance.
    pub const fn for_component(component_id: u32) -> Self {
        Self {
            component_id,
            level: DPFLTR_ERROR_LEVEL,
        }
    }
}

impl Default for DebugChannelConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_dpfilter_constants() {
        let cfg = DebugChannelConfig::default();
        assert_eq!(cfg.component_id, 101);
        assert_eq!(cfg.level, 0);
    }

    #[test]
    fn component_override_keeps_error_level() {
        let cfg = DebugChannelConfig::for_component(77);
        assert_eq!(cfg.component_id, 77);
        assert_eq!(cfg.level, DPFLTR_ERROR_LEVEL);
    }
}
