/// Design tokens for Shelfmark CLI output.
///
/// All icons must be sourced from this module; every Unicode icon has an
/// ASCII counterpart of the same role.
pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const WARNING: &str = "⚠";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";
    /// Children are browsed elsewhere
    pub const EXTERNAL: &str = "↗";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const WARNING: &str = "[WARN]";

    // Tree expansion.
    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";
    pub const EXTERNAL: &str = "[^]";
}

/// Icon set resolved for one output mode
#[derive(Debug, Clone, Copy)]
pub struct Icons {
    pub success: &'static str,
    pub warning: &'static str,
    pub expand: &'static str,
    pub collapse: &'static str,
    pub external: &'static str,
}

impl Icons {
    pub fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                success: icons::SUCCESS,
                warning: icons::WARNING,
                expand: icons::EXPAND,
                collapse: icons::COLLAPSE,
                external: icons::EXTERNAL,
            }
        } else {
            Self {
                success: icons_ascii::SUCCESS,
                warning: icons_ascii::WARNING,
                expand: icons_ascii::EXPAND,
                collapse: icons_ascii::COLLAPSE,
                external: icons_ascii::EXTERNAL,
            }
        }
    }
}
