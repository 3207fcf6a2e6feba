use super::*;
use crate::analysis::{self, FileCandidate};
use rfd::FileDialog;

impl EguiController {
    /// Validate and stage a candidate from the picker or a drop.
    ///
    /// A rejected candidate leaves any previously staged file in place.
    /// Ignored while a request is in flight, like the disabled picker.
    pub fn stage_file(&mut self, candidate: Option<FileCandidate>) {
        if self.is_analyzing() {
            tracing::debug!("Ignoring file intake while an analysis is running");
            return;
        }
        match analysis::stage_file(candidate) {
            Ok(file) => {
                tracing::info!("Staged {} ({} bytes)", file.name, file.bytes.len());
                self.ui.upload.file_label = file.name.clone();
                self.staged = Some(file);
                self.set_status("File ready for analysis.", StatusTone::Success);
                self.set_mode(UiMode::FileStaged);
                self.ui.submit.enabled = true;
            }
            Err(err) => {
                tracing::warn!("Rejected file: {err:?}");
                self.report_error(&err);
            }
        }
    }

    /// Open the native picker and stage the chosen file.
    pub fn pick_file_via_dialog(&mut self) {
        let Some(path) = FileDialog::new()
            .set_title("Choose a passenger CSV")
            .add_filter("CSV files", &["csv"])
            .add_filter("All files", &["*"])
            .pick_file()
        else {
            return;
        };
        self.stage_file(Some(FileCandidate::from_path(path)));
    }

    /// Track whether files are currently dragged over the window.
    pub fn set_drag_active(&mut self, active: bool) {
        self.ui.upload.drag_active = active;
    }

    /// Stage the first of the dropped files; an empty drop is ignored.
    pub fn handle_dropped_files(&mut self, files: Vec<egui::DroppedFile>) {
        self.set_drag_active(false);
        let Some(first) = files.into_iter().next() else {
            return;
        };
        self.stage_file(candidate_from_drop(first));
    }
}

fn candidate_from_drop(file: egui::DroppedFile) -> Option<FileCandidate> {
    let mime = Some(file.mime).filter(|mime| !mime.is_empty());
    let name = Some(file.name).filter(|name| !name.is_empty());
    match (file.bytes, file.path) {
        (Some(bytes), path) => {
            let name = name
                .or_else(|| {
                    path.as_deref()
                        .and_then(|path| path.file_name())
                        .map(|name| name.to_string_lossy().into_owned())
                })
                .unwrap_or_default();
            Some(FileCandidate::from_bytes(name, mime, bytes))
        }
        (None, Some(path)) => {
            let mut candidate = FileCandidate::from_path(path);
            candidate.mime = mime;
            if let Some(name) = name {
                candidate.name = name;
            }
            Some(candidate)
        }
        (None, None) => None,
    }
}
