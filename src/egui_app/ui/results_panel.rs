use eframe::egui::{
    self, ColorImage, CornerRadius, Frame, Margin, RichText, Sense, TextureOptions, Ui,
};
use egui_extras::{Column, TableBuilder};

use super::EguiApp;
use super::style::{self, Palette};
use crate::analysis::{ChartView, ResultsView, SummaryCard, TableRow};

const CHART_MAX_WIDTH: f32 = 560.0;

impl EguiApp {
    /// Rebuild chart textures whenever a new result arrives.
    pub(super) fn sync_chart_textures(&mut self, ctx: &egui::Context) {
        let generation = self.controller.ui.results.generation;
        if self.chart_generation == generation {
            return;
        }
        self.chart_generation = generation;
        self.chart_textures = match &self.controller.ui.results.view {
            Some(view) => view
                .charts
                .iter()
                .map(|chart| {
                    let image = chart.image.as_ref().ok()?;
                    let color = ColorImage::from_rgba_unmultiplied(
                        [image.width as usize, image.height as usize],
                        &image.rgba,
                    );
                    Some(ctx.load_texture(
                        format!("chart_{generation}_{}", chart.name),
                        color,
                        TextureOptions::LINEAR,
                    ))
                })
                .collect(),
            None => Vec::new(),
        };
    }

    pub(super) fn render_results_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette(self.controller.theme());
        let Some(view) = self.controller.ui.results.view.as_ref() else {
            return;
        };
        ui.heading("Analysis Results");
        ui.add_space(8.0);
        render_cards(ui, palette, &view.cards);
        ui.add_space(16.0);
        ui.label(RichText::new("Predictions").strong().size(15.0));
        ui.add_space(4.0);
        render_table(ui, palette, &view.rows);
        render_charts(ui, palette, view, &self.chart_textures);
    }
}

fn render_cards(ui: &mut Ui, palette: Palette, cards: &[SummaryCard; 3]) {
    ui.columns(cards.len(), |columns| {
        for (column, card) in columns.iter_mut().zip(cards.iter()) {
            Frame::new()
                .fill(palette.bg_secondary)
                .stroke(style::card_border(palette))
                .corner_radius(CornerRadius::same(8))
                .inner_margin(Margin::same(14))
                .show(column, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new(card.label).color(style::card_color(palette, card.tone)),
                        );
                        ui.label(RichText::new(card.value.to_string()).size(28.0).strong());
                    });
                });
        }
    });
}

fn render_table(ui: &mut Ui, palette: Palette, rows: &[TableRow]) {
    if rows.is_empty() {
        ui.label(RichText::new("No predictions returned.").color(palette.text_muted));
        return;
    }
    TableBuilder::new(ui)
        .id_salt("predictions_table")
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(100.0)) // Passenger ID
        .column(Column::remainder().at_least(180.0)) // Name
        .column(Column::auto().at_least(130.0)) // Outcome
        .column(Column::auto().at_least(150.0)) // Probability
        .min_scrolled_height(0.0)
        .max_scroll_height(360.0)
        .header(24.0, |mut header| {
            for title in [
                "Passenger ID",
                "Name",
                "Predicted Outcome",
                "Survival Probability",
            ] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(22.0, rows.len(), |mut row| {
                let entry = &rows[row.index()];
                row.col(|ui| {
                    ui.label(&entry.passenger_id);
                });
                row.col(|ui| {
                    ui.label(&entry.name);
                });
                row.col(|ui| {
                    ui.painter().rect_filled(
                        ui.max_rect(),
                        0.0,
                        style::outcome_fill(palette, entry.outcome),
                    );
                    ui.label(
                        RichText::new(entry.outcome_label())
                            .color(style::outcome_color(palette, entry.outcome))
                            .strong(),
                    );
                });
                row.col(|ui| {
                    ui.label(&entry.probability);
                });
            });
        });
}

fn render_charts(
    ui: &mut Ui,
    palette: Palette,
    view: &ResultsView,
    textures: &[Option<egui::TextureHandle>],
) {
    if view.charts.is_empty() {
        return;
    }
    ui.add_space(16.0);
    ui.label(RichText::new("Charts").strong().size(15.0));
    for (index, chart) in view.charts.iter().enumerate() {
        ui.add_space(8.0);
        Frame::new()
            .fill(palette.bg_secondary)
            .stroke(style::card_border(palette))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(chart_title(&chart.name)).strong());
                render_chart(ui, palette, chart, textures.get(index).and_then(Option::as_ref));
            });
    }
}

fn render_chart(
    ui: &mut Ui,
    palette: Palette,
    chart: &ChartView,
    texture: Option<&egui::TextureHandle>,
) {
    match (&chart.image, texture) {
        (Ok(_), Some(texture)) => {
            let size = texture.size_vec2();
            let width = size.x.min(ui.available_width()).min(CHART_MAX_WIDTH);
            let scale = if size.x > 0.0 { width / size.x } else { 1.0 };
            ui.vertical_centered(|ui| {
                let (rect, _) = ui.allocate_exact_size(size * scale, Sense::hover());
                let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                ui.painter()
                    .image(texture.id(), rect, uv, egui::Color32::WHITE);
            });
        }
        (Err(err), _) => {
            ui.label(
                RichText::new(format!("Chart could not be displayed: {err}"))
                    .color(palette.warning),
            );
        }
        (Ok(_), None) => {
            ui.label(RichText::new("Loading chart...").color(palette.text_muted));
        }
    }
}

/// `sex_survival` -> `Sex survival`.
fn chart_title(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
