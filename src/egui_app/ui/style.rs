use eframe::egui::{
    self, Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

use crate::analysis::{CardTone, PredictedOutcome};
use crate::config::ThemePreference;
use crate::egui_app::state::StatusTone;

#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub drop_highlight: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub danger: Color32,
}

pub fn palette(theme: ThemePreference) -> Palette {
    match theme {
        ThemePreference::Dark => Palette {
            bg_primary: Color32::from_rgb(17, 24, 39),
            bg_secondary: Color32::from_rgb(31, 41, 55),
            bg_tertiary: Color32::from_rgb(55, 65, 81),
            panel_outline: Color32::from_rgb(75, 85, 99),
            text_primary: Color32::from_rgb(229, 231, 235),
            text_muted: Color32::from_rgb(156, 163, 175),
            accent: Color32::from_rgb(96, 165, 250),
            drop_highlight: Color32::from_rgb(30, 58, 95),
            success: Color32::from_rgb(74, 222, 128),
            warning: Color32::from_rgb(251, 191, 36),
            danger: Color32::from_rgb(248, 113, 113),
        },
        ThemePreference::Light => Palette {
            bg_primary: Color32::from_rgb(243, 244, 246),
            bg_secondary: Color32::from_rgb(255, 255, 255),
            bg_tertiary: Color32::from_rgb(229, 231, 235),
            panel_outline: Color32::from_rgb(209, 213, 219),
            text_primary: Color32::from_rgb(17, 24, 39),
            text_muted: Color32::from_rgb(107, 114, 128),
            accent: Color32::from_rgb(37, 99, 235),
            drop_highlight: Color32::from_rgb(219, 234, 254),
            success: Color32::from_rgb(22, 163, 74),
            warning: Color32::from_rgb(217, 119, 6),
            danger: Color32::from_rgb(220, 38, 38),
        },
    }
}

pub fn visuals(theme: ThemePreference) -> Visuals {
    let palette = palette(theme);
    let mut visuals = match theme {
        ThemePreference::Dark => Visuals::dark(),
        ThemePreference::Light => Visuals::light(),
    };
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent;
    visuals.extreme_bg_color = palette.bg_secondary;
    visuals.faint_bg_color = palette.bg_tertiary;
    visuals.error_fg_color = palette.danger;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_rounded(&mut visuals.widgets.inactive, palette);
    set_rounded(&mut visuals.widgets.hovered, palette);
    set_rounded(&mut visuals.widgets.active, palette);
    set_rounded(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::same(8);
    visuals.menu_corner_radius = CornerRadius::same(6);
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
    visuals
}

fn set_rounded(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(6);
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.bg_tertiary;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

/// Install both variants so a theme switch is just `set_theme`.
pub fn install_visuals(ctx: &egui::Context) {
    ctx.set_visuals_of(egui::Theme::Dark, visuals(ThemePreference::Dark));
    ctx.set_visuals_of(egui::Theme::Light, visuals(ThemePreference::Light));
}

pub fn egui_theme(theme: ThemePreference) -> egui::Theme {
    match theme {
        ThemePreference::Dark => egui::Theme::Dark,
        ThemePreference::Light => egui::Theme::Light,
    }
}

pub fn preference_from_egui(theme: egui::Theme) -> ThemePreference {
    match theme {
        egui::Theme::Dark => ThemePreference::Dark,
        egui::Theme::Light => ThemePreference::Light,
    }
}

/// Glyph for the toggle: the theme a click switches to.
pub fn theme_toggle_icon(theme: ThemePreference) -> &'static str {
    match theme {
        ThemePreference::Dark => "☀",
        ThemePreference::Light => "🌙",
    }
}

pub fn status_color(palette: Palette, tone: StatusTone) -> Color32 {
    match tone {
        StatusTone::Idle => palette.text_muted,
        StatusTone::Loading => palette.accent,
        StatusTone::Success => palette.success,
        StatusTone::Warning => palette.warning,
        StatusTone::Error => palette.danger,
    }
}

pub fn card_color(palette: Palette, tone: CardTone) -> Color32 {
    match tone {
        CardTone::Neutral => palette.accent,
        CardTone::Survived => palette.success,
        CardTone::Deceased => palette.danger,
    }
}

pub fn outcome_color(palette: Palette, outcome: PredictedOutcome) -> Color32 {
    match outcome {
        PredictedOutcome::Survived => palette.success,
        PredictedOutcome::DidNotSurvive => palette.danger,
    }
}

/// Translucent cell background behind an outcome label.
pub fn outcome_fill(palette: Palette, outcome: PredictedOutcome) -> Color32 {
    with_alpha(outcome_color(palette, outcome), 40)
}

pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

pub fn card_border(palette: Palette) -> Stroke {
    Stroke::new(1.0, palette.panel_outline)
}

pub fn drop_zone_border(palette: Palette, drag_active: bool) -> Stroke {
    if drag_active {
        Stroke::new(2.0, palette.accent)
    } else {
        Stroke::new(1.5, palette.panel_outline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_conversions_round_trip() {
        for theme in [ThemePreference::Dark, ThemePreference::Light] {
            assert_eq!(preference_from_egui(egui_theme(theme)), theme);
        }
    }

    #[test]
    fn toggle_icon_names_the_other_theme() {
        assert_eq!(theme_toggle_icon(ThemePreference::Dark), "☀");
        assert_eq!(theme_toggle_icon(ThemePreference::Light), "🌙");
    }

    #[test]
    fn visuals_follow_theme_darkness() {
        assert!(visuals(ThemePreference::Dark).dark_mode);
        assert!(!visuals(ThemePreference::Light).dark_mode);
    }

    #[test]
    fn outcome_fill_is_translucent() {
        let palette = palette(ThemePreference::Light);
        assert_eq!(outcome_fill(palette, PredictedOutcome::Survived).a(), 40);
    }
}
