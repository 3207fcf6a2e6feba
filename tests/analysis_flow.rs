mod support;

use std::io::Cursor;
use std::time::Duration;

use base64::Engine;
use passenger_insight::{
    analysis::{self, AnalysisError, FileCandidate, PredictedOutcome},
    config::{self, AppConfig, ThemePreference},
    egui_app::{
        controller::EguiController,
        state::{StatusTone, UiMode, SUBMIT_LABEL},
    },
};
use support::{backend::StubBackend, env::ConfigHomeGuard};
use tempfile::TempDir;

const MANIFEST: &str = "PassengerId,Pclass,Name,Sex,Age\n1,3,A,male,22\n2,1,B,female,38\n";

struct ControllerHarness {
    _config: ConfigHomeGuard,
    temp: TempDir,
    pub controller: EguiController,
}

impl ControllerHarness {
    fn new(server_url: &str) -> Self {
        let temp = tempfile::tempdir().expect("create tempdir");
        let config_home = temp.path().join("config");
        std::fs::create_dir_all(&config_home).expect("create config dir");
        let env = ConfigHomeGuard::set_config_home(config_home);
        let config = AppConfig {
            theme: None,
            server_url: server_url.to_string(),
        };
        Self {
            _config: env,
            temp,
            controller: EguiController::new(config, Some(ThemePreference::Dark)),
        }
    }

    fn write_manifest(&self, name: &str) -> std::path::PathBuf {
        let path = self.temp.path().join(name);
        std::fs::write(&path, MANIFEST).expect("write manifest");
        path
    }

    fn wait_until_settled(&mut self) {
        for _ in 0..500 {
            self.controller.poll_jobs();
            if !self.controller.is_analyzing() {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("analysis never finished");
    }
}

fn chart_png_base64() -> String {
    let image = image::RgbaImage::from_pixel(4, 3, image::Rgba([10, 20, 30, 255]));
    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .expect("encode png");
    base64::engine::general_purpose::STANDARD.encode(png)
}

#[test]
fn picked_file_is_uploaded_and_results_rendered() {
    let body = format!(
        r#"{{"summary":{{"total":2,"survived":1,"deceased":1}},
            "predictions":[
              {{"PassengerId":1,"Name":"A","Predicted_Outcome":1,"Survival_Probability":0.9}},
              {{"PassengerId":2,"Name":"B","Predicted_Outcome":0,"Survival_Probability":0.1}}],
            "charts":{{"sex_survival":"{}","broken":"not base64!"}}}}"#,
        chart_png_base64()
    );
    let backend = StubBackend::respond_json("200 OK", &body);
    let mut harness = ControllerHarness::new(&backend.base_url);
    let path = harness.write_manifest("train.csv");

    harness
        .controller
        .stage_file(Some(FileCandidate::from_path(path)));
    assert_eq!(harness.controller.ui.mode, UiMode::FileStaged);
    harness.controller.submit_for_analysis();
    harness.wait_until_settled();

    let request = backend.received();
    assert!(request.starts_with("POST /analyze "));
    assert!(request.contains("multipart/form-data; boundary="));
    assert!(request.contains("name=\"file\"; filename=\"train.csv\""));
    assert!(request.contains(MANIFEST));

    let ui = &harness.controller.ui;
    assert_eq!(ui.mode, UiMode::Success);
    assert_eq!(ui.status.tone, StatusTone::Success);
    assert!(ui.submit.enabled);
    assert_eq!(ui.submit.label, SUBMIT_LABEL);
    let view = ui.results.view.as_ref().expect("results visible");
    assert_eq!(view.cards[0].label, "Total Passengers");
    assert_eq!(view.cards[0].value, 2);
    assert_eq!(view.rows[0].outcome, PredictedOutcome::Survived);
    assert_eq!(view.rows[1].probability, "10.00%");

    let names: Vec<&str> = view.charts.iter().map(|chart| chart.name.as_str()).collect();
    assert_eq!(names, vec!["broken", "sex_survival"]);
    assert!(view.charts[0].image.is_err());
    let chart = view.charts[1].image.as_ref().expect("chart decodes");
    assert_eq!((chart.width, chart.height), (4, 3));
    assert_eq!(chart.rgba.len(), 4 * 3 * 4);
}

#[test]
fn server_rejection_is_reported_and_submit_restored() {
    let backend = StubBackend::respond_json(
        "400 BAD REQUEST",
        r#"{"error": "Invalid file type, please upload a CSV"}"#,
    );
    let mut harness = ControllerHarness::new(&backend.base_url);
    let path = harness.write_manifest("train.csv");
    harness
        .controller
        .stage_file(Some(FileCandidate::from_path(path)));
    harness.controller.submit_for_analysis();
    harness.wait_until_settled();

    let ui = &harness.controller.ui;
    assert_eq!(ui.mode, UiMode::Error);
    assert_eq!(
        ui.status.text,
        "Analysis Error: Invalid file type, please upload a CSV"
    );
    assert!(ui.submit.enabled);
    assert!(!ui.submit.busy);
    assert!(!ui.results.visible());
}

#[test]
fn html_error_page_reports_status_code() {
    let backend = StubBackend::respond_raw(
        b"HTTP/1.1 502 Bad Gateway\r\nContent-Type: text/html\r\nContent-Length: 13\r\nConnection: close\r\n\r\n<h1>oops</h1>"
            .to_vec(),
    );
    let mut harness = ControllerHarness::new(&backend.base_url);
    let path = harness.write_manifest("train.csv");
    harness
        .controller
        .stage_file(Some(FileCandidate::from_path(path)));
    harness.controller.submit_for_analysis();
    harness.wait_until_settled();

    assert_eq!(
        harness.controller.ui.status.text,
        "Analysis Error: HTTP error! Status: 502"
    );
}

#[test]
fn missing_file_on_disk_is_reported() {
    let mut harness = ControllerHarness::new("http://127.0.0.1:9");
    let missing = harness.temp.path().join("gone.csv");
    harness
        .controller
        .stage_file(Some(FileCandidate::from_path(missing)));
    assert_eq!(harness.controller.ui.mode, UiMode::Error);
    assert!(harness.controller.staged_file().is_none());
    assert!(!harness.controller.ui.submit.enabled);
}

#[test]
fn theme_toggle_is_persisted_under_config_home() {
    let mut harness = ControllerHarness::new("http://127.0.0.1:9");
    assert_eq!(harness.controller.theme(), ThemePreference::Dark);
    harness.controller.toggle_theme();

    let saved = config::load_or_default().expect("load config");
    assert_eq!(saved.theme, Some(ThemePreference::Light));
    assert_eq!(saved.server_url, "http://127.0.0.1:9");
}

#[test]
fn submit_api_can_be_used_without_the_ui() {
    let backend = StubBackend::respond_json(
        "200 OK",
        r#"{"summary":{"total":1,"survived":0,"deceased":1},"predictions":[{"PassengerId":"N/A","Name":"C","Predicted_Outcome":0,"Survival_Probability":0.25}]}"#,
    );
    let staged = analysis::stage_file(Some(FileCandidate::from_bytes(
        "manifest.csv",
        Some("text/csv".into()),
        MANIFEST.as_bytes().to_vec(),
    )))
    .expect("csv accepted");
    let endpoint = format!("{}/analyze", backend.base_url);
    let result = analysis::submit_for_analysis(&endpoint, &staged).expect("analysis succeeds");
    assert!(result.charts.is_empty());

    let view = analysis::render(&result);
    assert_eq!(view.rows[0].passenger_id, "N/A");
    assert_eq!(view.rows[0].probability, "25.00%");
    assert_eq!(view.cards[2].value, 1);
}

#[test]
fn non_csv_candidates_are_rejected_before_upload() {
    let err = analysis::stage_file(Some(FileCandidate::from_bytes(
        "photo.png",
        Some("image/png".into()),
        vec![0u8; 4],
    )))
    .unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidFileType { .. }));
    assert_eq!(err.to_string(), "Error: Please upload a valid .csv file.");
}
