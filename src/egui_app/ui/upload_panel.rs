use eframe::egui::{self, CornerRadius, Frame, Margin, RichText, Ui};

use super::EguiApp;
use super::style;

impl EguiApp {
    /// Drop zone, picker button, submit control and status line.
    pub(super) fn render_upload_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette(self.controller.theme());
        let drag_active = self.controller.ui.upload.drag_active;
        let fill = if drag_active {
            palette.drop_highlight
        } else {
            palette.bg_secondary
        };
        Frame::new()
            .fill(fill)
            .stroke(style::drop_zone_border(palette, drag_active))
            .corner_radius(CornerRadius::same(10))
            .inner_margin(Margin::same(24))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    let prompt = if drag_active {
                        "Release to stage the file"
                    } else {
                        "Drag & drop your passenger CSV here"
                    };
                    ui.label(RichText::new(prompt).size(16.0).strong());
                    ui.label(RichText::new("or").color(palette.text_muted));
                    if ui
                        .add_enabled(
                            !self.controller.is_analyzing(),
                            egui::Button::new("Browse files..."),
                        )
                        .clicked()
                    {
                        self.controller.pick_file_via_dialog();
                    }
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(&self.controller.ui.upload.file_label)
                            .color(palette.text_muted),
                    );
                });
            });

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            let submit = self.controller.ui.submit.clone();
            let response = ui.horizontal(|ui| {
                let clicked = ui
                    .add_enabled(
                        submit.enabled,
                        egui::Button::new(RichText::new(&submit.label).strong())
                            .min_size(egui::vec2(180.0, 34.0)),
                    )
                    .clicked();
                if submit.busy {
                    ui.add(egui::Spinner::new());
                }
                clicked
            });
            if response.inner {
                self.controller.submit_for_analysis();
            }
            let status = &self.controller.ui.status;
            ui.add_space(6.0);
            ui.label(RichText::new(&status.text).color(style::status_color(palette, status.tone)));
        });
    }
}
