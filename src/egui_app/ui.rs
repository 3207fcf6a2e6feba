//! egui renderer for the application UI.

mod results_panel;
pub mod style;
mod upload_panel;

use std::time::Duration;

use crate::config;
use crate::egui_app::controller::EguiController;
use eframe::egui::{self, Frame, Margin, RichText, TextureHandle};

/// Smallest window that still fits the upload controls and summary cards.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(640.0, 520.0);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    applied_theme: Option<config::ThemePreference>,
    /// One slot per chart of the current result; `None` for undecodable charts.
    chart_textures: Vec<Option<TextureHandle>>,
    chart_generation: u64,
}

impl EguiApp {
    /// Create a new egui app, loading persisted configuration.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, String> {
        let config =
            config::load_or_default().map_err(|err| format!("Failed to load config: {err}"))?;
        let system_theme = cc.egui_ctx.system_theme().map(style::preference_from_egui);
        style::install_visuals(&cc.egui_ctx);
        Ok(Self::from_controller(EguiController::new(config, system_theme)))
    }

    fn from_controller(controller: EguiController) -> Self {
        Self {
            controller,
            applied_theme: None,
            chart_textures: Vec::new(),
            chart_generation: 0,
        }
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        let theme = self.controller.theme();
        if self.applied_theme == Some(theme) {
            return;
        }
        ctx.set_theme(style::egui_theme(theme));
        self.applied_theme = Some(theme);
    }

    fn handle_file_drops(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                i.raw.dropped_files.clone(),
            )
        });
        if !dropped.is_empty() {
            self.controller.handle_dropped_files(dropped);
            return;
        }
        if hovering != self.controller.ui.upload.drag_active {
            self.controller.set_drag_active(hovering);
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette(self.controller.theme());
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .inner_margin(Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.heading(RichText::new("Titanic Passenger Insight").strong());
                        ui.label(
                            RichText::new("Upload a passenger manifest to predict survival")
                                .color(palette.text_muted),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let icon = style::theme_toggle_icon(self.controller.theme());
                        if ui
                            .button(RichText::new(icon).size(18.0))
                            .on_hover_text("Toggle light/dark theme")
                            .clicked()
                        {
                            self.controller.toggle_theme();
                        }
                    });
                });
            });
    }

    fn render_central(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(Frame::central_panel(&ctx.style()).inner_margin(Margin::same(16)))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("main_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.render_upload_panel(ui);
                        if self.controller.ui.results.visible() {
                            ui.add_space(20.0);
                            self.render_results_panel(ui);
                        }
                    });
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.poll_jobs();
        self.apply_theme(ctx);
        self.handle_file_drops(ctx);
        self.sync_chart_textures(ctx);
        self.render_top_bar(ctx);
        self.render_central(ctx);
        if self.controller.is_analyzing() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
