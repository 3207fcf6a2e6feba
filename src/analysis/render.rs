//! Pure transformation of an [`AnalysisResult`] into displayable pieces.
//!
//! Nothing here touches egui; the UI layer turns a [`ResultsView`] into widgets
//! and textures.

use base64::Engine;

use super::{AnalysisResult, PredictedOutcome, Summary};

/// Everything the results region shows for one analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultsView {
    pub cards: [SummaryCard; 3],
    pub rows: Vec<TableRow>,
    pub charts: Vec<ChartView>,
}

/// Color family of a summary card label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardTone {
    Neutral,
    Survived,
    Deceased,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryCard {
    pub label: &'static str,
    pub value: u64,
    pub tone: CardTone,
}

/// One prediction, formatted for the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub passenger_id: String,
    pub name: String,
    pub outcome: PredictedOutcome,
    pub probability: String,
}

impl TableRow {
    pub fn outcome_label(&self) -> &'static str {
        self.outcome.label()
    }
}

/// A chart entry; undecodable data is kept as an error so the rest still renders.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartView {
    pub name: String,
    pub image: Result<ChartImage, String>,
}

/// Decoded RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Build the summary cards, table rows and chart images for `result`.
pub fn render(result: &AnalysisResult) -> ResultsView {
    ResultsView {
        cards: summary_cards(&result.summary),
        rows: result
            .predictions
            .iter()
            .map(|prediction| TableRow {
                passenger_id: prediction.passenger_id.to_string(),
                name: prediction.name.clone(),
                outcome: prediction.outcome,
                probability: format_probability(prediction.survival_probability),
            })
            .collect(),
        charts: result
            .charts
            .iter()
            .map(|(name, data)| ChartView {
                name: name.clone(),
                image: decode_chart(data),
            })
            .collect(),
    }
}

fn summary_cards(summary: &Summary) -> [SummaryCard; 3] {
    [
        SummaryCard {
            label: "Total Passengers",
            value: summary.total,
            tone: CardTone::Neutral,
        },
        SummaryCard {
            label: "Predicted Survivors",
            value: summary.survived,
            tone: CardTone::Survived,
        },
        SummaryCard {
            label: "Predicted Deceased",
            value: summary.deceased,
            tone: CardTone::Deceased,
        },
    ]
}

/// Format a probability in `[0, 1]` as a percentage with two decimals.
///
/// Exact ties round away from zero (`0.12625` -> `12.63%`).
pub fn format_probability(probability: f64) -> String {
    format!("{:.2}%", round_ties_away(probability * 100.0))
}

/// `{:.2}` breaks exact ties to even; nudge those onto the next hundredth.
fn round_ties_away(percent: f64) -> f64 {
    // A value sitting exactly on a half-hundredth is a multiple of 1/8.
    let on_eighth = (percent * 8.0).fract() == 0.0;
    let hundredths = percent * 100.0;
    if on_eighth && hundredths.fract().abs() == 0.5 {
        (hundredths + 0.5_f64.copysign(hundredths)) / 100.0
    } else {
        percent
    }
}

/// Decode base64 PNG data into RGBA pixels.
pub fn decode_chart(data: &str) -> Result<ChartImage, String> {
    let png = base64::engine::general_purpose::STANDARD
        .decode(data.trim())
        .map_err(|err| format!("invalid base64: {err}"))?;
    let image = image::load_from_memory_with_format(&png, image::ImageFormat::Png)
        .map_err(|err| format!("invalid PNG: {err}"))?
        .to_rgba8();
    let (width, height) = image.dimensions();
    Ok(ChartImage {
        width,
        height,
        rgba: image.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(json: &str) -> AnalysisResult {
        AnalysisResult::from_json(json.as_bytes()).unwrap()
    }

    fn png_base64(width: u32, height: u32) -> String {
        let image = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        base64::engine::general_purpose::STANDARD.encode(bytes)
    }

    #[test]
    fn probability_has_two_decimals() {
        assert_eq!(format_probability(0.8734), "87.34%");
        assert_eq!(format_probability(0.5), "50.00%");
        assert_eq!(format_probability(0.0), "0.00%");
        assert_eq!(format_probability(1.0), "100.00%");
        assert_eq!(format_probability(0.9), "90.00%");
    }

    #[test]
    fn probability_ties_round_up() {
        assert_eq!(format_probability(0.12625), "12.63%");
        assert_eq!(format_probability(0.00125), "0.13%");
        assert_eq!(format_probability(0.1262), "12.62%");
    }

    #[test]
    fn renders_scenario_rows_in_order() {
        let view = render(&parse(
            r#"{"summary":{"total":2,"survived":1,"deceased":1},"predictions":[{"PassengerId":1,"Name":"A","Predicted_Outcome":1,"Survival_Probability":0.9},{"PassengerId":2,"Name":"B","Predicted_Outcome":0,"Survival_Probability":0.1}],"charts":{}}"#,
        ));
        let values: Vec<u64> = view.cards.iter().map(|card| card.value).collect();
        assert_eq!(values, vec![2, 1, 1]);
        assert_eq!(view.cards[0].label, "Total Passengers");

        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].passenger_id, "1");
        assert_eq!(view.rows[0].name, "A");
        assert_eq!(view.rows[0].outcome_label(), "Survived");
        assert_eq!(view.rows[0].probability, "90.00%");
        assert_eq!(view.rows[1].outcome_label(), "Did Not Survive");
        assert_eq!(view.rows[1].probability, "10.00%");
        assert!(view.charts.is_empty());
    }

    #[test]
    fn keeps_received_order_without_sorting() {
        let view = render(&parse(
            r#"{"summary":{"total":3,"survived":0,"deceased":3},"predictions":[
                {"PassengerId":30,"Name":"C","Predicted_Outcome":0,"Survival_Probability":0.3},
                {"PassengerId":10,"Name":"A","Predicted_Outcome":0,"Survival_Probability":0.1},
                {"PassengerId":20,"Name":"B","Predicted_Outcome":0,"Survival_Probability":0.2}]}"#,
        ));
        let ids: Vec<&str> = view.rows.iter().map(|row| row.passenger_id.as_str()).collect();
        assert_eq!(ids, vec!["30", "10", "20"]);
    }

    #[test]
    fn decodes_png_charts() {
        let json = format!(
            r#"{{"summary":{{"total":0,"survived":0,"deceased":0}},"predictions":[],"charts":{{"sex_survival":"{}"}}}}"#,
            png_base64(3, 2)
        );
        let view = render(&parse(&json));
        assert_eq!(view.charts.len(), 1);
        assert_eq!(view.charts[0].name, "sex_survival");
        let image = view.charts[0].image.as_ref().unwrap();
        assert_eq!((image.width, image.height), (3, 2));
        assert_eq!(image.rgba.len(), 3 * 2 * 4);
        assert_eq!(&image.rgba[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn bad_chart_data_is_kept_as_error() {
        let json = format!(
            r#"{{"summary":{{"total":0,"survived":0,"deceased":0}},"predictions":[],"charts":{{"a_broken":"%%%","b_good":"{}"}}}}"#,
            png_base64(1, 1)
        );
        let view = render(&parse(&json));
        assert_eq!(view.charts.len(), 2);
        assert!(view.charts[0].image.as_ref().unwrap_err().contains("base64"));
        assert!(view.charts[1].image.is_ok());
    }

    #[test]
    fn non_png_bytes_are_rejected() {
        let data = base64::engine::general_purpose::STANDARD.encode(b"not an image");
        assert!(decode_chart(&data).unwrap_err().contains("PNG"));
    }
}
