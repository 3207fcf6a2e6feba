use crate::analysis::ResultsView;

/// Results region; hidden until the first successful analysis.
#[derive(Clone, Debug, Default)]
pub struct ResultsState {
    pub view: Option<ResultsView>,
    /// Bumped on every new result so cached chart textures can be rebuilt.
    pub generation: u64,
}

impl ResultsState {
    pub fn visible(&self) -> bool {
        self.view.is_some()
    }

    pub(crate) fn show(&mut self, view: ResultsView) {
        self.view = Some(view);
        self.generation += 1;
    }
}
