use super::*;
use crate::config;

impl EguiController {
    /// Theme the window should be drawn with.
    pub fn theme(&self) -> ThemePreference {
        self.ui.theme
    }

    /// Flip between dark and light and persist the choice.
    ///
    /// A failed save keeps the new theme for this session and reports a warning.
    pub fn toggle_theme(&mut self) {
        let next = self.ui.theme.toggled();
        self.ui.theme = next;
        self.config.theme = Some(next);
        if let Err(err) = config::save(&self.config) {
            tracing::warn!("Failed to persist theme {}: {err}", next.as_str());
            self.set_status(
                format!("Theme changed but could not be saved: {err}"),
                StatusTone::Warning,
            );
        }
    }
}
