//! Single-live-flow load loop
//!
//! One grid/form pair is shared by all load flows. Each `load` call becomes
//! a generation; only the newest generation may commit, so a slow stale
//! response can never overwrite data a later flow already produced. The
//! loading flag belongs to the newest flow and is cleared on every exit
//! path, success or failure.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use sheetgrid_core::{Grid, SheetForm};

use crate::error::{LoadError, Result};
use crate::locator::SheetLocator;

/// Anything that can produce a grid for a locator
///
/// [`SheetsClient`](crate::SheetsClient) is the production source; tests
/// substitute in-process stubs.
#[async_trait]
pub trait GridSource: Send + Sync {
    /// Fetch and decode the tab the locator names
    async fn fetch_grid(&self, locator: &SheetLocator) -> Result<Grid>;
}

/// Snapshot of the loader's shared state
#[derive(Debug, Clone, Default)]
pub struct LoadState {
    /// The last committed grid, if any
    pub grid: Option<Grid>,
    /// Editable form seeded from the last committed grid
    pub form: Option<SheetForm>,
    /// True while the newest flow is in flight
    pub loading: bool,
}

/// Drives loads against a [`GridSource`] and owns the shared state
pub struct SheetLoader<S> {
    source: S,
    generation: AtomicU64,
    state: Mutex<LoadState>,
}

impl<S: GridSource> SheetLoader<S> {
    /// Create a loader with no grid yet
    pub fn new(source: S) -> Self {
        SheetLoader {
            source,
            generation: AtomicU64::new(0),
            state: Mutex::new(LoadState::default()),
        }
    }

    /// Fetch the tab and commit the outcome, unless superseded
    ///
    /// On success the grid is replaced wholesale and the form re-seeded
    /// from it. A parse failure discards the previous grid and form (the
    /// template no longer matches, so the old data cannot be trusted);
    /// transport and usage failures leave prior state untouched. Either
    /// way the error is returned to the caller.
    pub async fn load(&self, locator: &SheetLocator) -> Result<()> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.lock().loading = true;

        tracing::debug!(generation, sheet = %locator.sheet_name, "load flow started");
        let outcome = self.source.fetch_grid(locator).await;
        self.commit(generation, outcome)
    }

    /// Current state snapshot
    pub fn state(&self) -> LoadState {
        self.lock().clone()
    }

    /// The last committed grid, if any
    pub fn grid(&self) -> Option<Grid> {
        self.lock().grid.clone()
    }

    /// True while the newest flow is in flight
    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    /// Mutate the editable form in place, if one is seeded
    ///
    /// Form edits are local state; they never flow back into the grid.
    pub fn edit_form<R>(&self, edit: impl FnOnce(&mut SheetForm) -> R) -> Option<R> {
        self.lock().form.as_mut().map(edit)
    }

    fn commit(&self, generation: u64, outcome: Result<Grid>) -> Result<()> {
        let mut state = self.lock();

        if self.generation.load(Ordering::SeqCst) != generation {
            // A newer flow owns the state and the loading flag now; this
            // result, good or bad, must not touch either.
            tracing::debug!(generation, "discarding superseded load result");
            return outcome.map(|_| ());
        }

        state.loading = false;
        match outcome {
            Ok(grid) => {
                state.form = Some(SheetForm::seed(&grid));
                state.grid = Some(grid);
                tracing::info!(generation, "load flow committed");
                Ok(())
            }
            Err(err @ LoadError::Parse(_)) => {
                // The payload no longer matches the template, so the grid
                // loaded under the old assumption is discarded too.
                state.grid = None;
                state.form = None;
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LoadState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use sheetgrid_core::{CellValue, Row};
    use tokio::sync::Notify;

    fn tagged_grid(tag: &str) -> Grid {
        Grid::new(vec![Row::new(vec![
            CellValue::text("Name"),
            CellValue::text(tag),
        ])])
    }

    fn locator(sheet: &str) -> SheetLocator {
        SheetLocator::new("SHEET", sheet)
    }

    /// Source keyed by tab name: "slow" waits for the gate, "transport"
    /// and "parse" fail, everything else succeeds with a tagged grid.
    struct ScriptedSource {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl GridSource for ScriptedSource {
        async fn fetch_grid(&self, locator: &SheetLocator) -> Result<Grid> {
            match locator.sheet_name.as_str() {
                "slow" => {
                    self.gate.notified().await;
                    Ok(tagged_grid("slow"))
                }
                "transport" => Err(LoadError::Transport("connection refused".into())),
                "parse" => Err(sheetgrid_gviz::parse_response("not a payload")
                    .unwrap_err()
                    .into()),
                tag => Ok(tagged_grid(tag)),
            }
        }
    }

    fn loader() -> (Arc<SheetLoader<ScriptedSource>>, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let source = ScriptedSource { gate: gate.clone() };
        (Arc::new(SheetLoader::new(source)), gate)
    }

    fn committed_tag(loader: &SheetLoader<ScriptedSource>) -> Option<String> {
        loader.grid().map(|g| g.cell(0, 1).to_string())
    }

    #[tokio::test]
    async fn test_success_commits_grid_and_form() {
        let (loader, _gate) = loader();
        loader.load(&locator("first")).await.unwrap();

        let state = loader.state();
        assert!(!state.loading);
        assert_eq!(committed_tag(&loader).as_deref(), Some("first"));
        assert_eq!(state.form.unwrap().name(), "first");
    }

    #[tokio::test]
    async fn test_new_load_replaces_wholesale() {
        let (loader, _gate) = loader();
        loader.load(&locator("first")).await.unwrap();
        loader.edit_form(|form| form.set_name("edited"));

        loader.load(&locator("second")).await.unwrap();
        let state = loader.state();
        assert_eq!(committed_tag(&loader).as_deref(), Some("second"));
        // Form is re-seeded, not merged with the edits
        assert_eq!(state.form.unwrap().name(), "second");
    }

    #[tokio::test]
    async fn test_stale_flow_cannot_overwrite_newer_data() {
        let (loader, gate) = loader();

        let slow = tokio::spawn({
            let loader = loader.clone();
            async move { loader.load(&locator("slow")).await }
        });
        // Let the slow flow take its generation and block at the gate
        tokio::task::yield_now().await;

        loader.load(&locator("fast")).await.unwrap();
        assert_eq!(committed_tag(&loader).as_deref(), Some("fast"));

        gate.notify_one();
        slow.await.unwrap().unwrap();

        // The stale result was discarded; the loading flag stays cleared
        let state = loader.state();
        assert_eq!(committed_tag(&loader).as_deref(), Some("fast"));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_prior_state() {
        let (loader, _gate) = loader();
        loader.load(&locator("first")).await.unwrap();

        let err = loader.load(&locator("transport")).await.unwrap_err();
        assert!(err.is_transport());

        let state = loader.state();
        assert!(!state.loading);
        assert_eq!(committed_tag(&loader).as_deref(), Some("first"));
        assert!(state.form.is_some());
    }

    #[tokio::test]
    async fn test_parse_failure_discards_grid() {
        let (loader, _gate) = loader();
        loader.load(&locator("first")).await.unwrap();

        let err = loader.load(&locator("parse")).await.unwrap_err();
        assert!(err.is_parse());

        let state = loader.state();
        assert!(!state.loading);
        assert!(state.grid.is_none());
        assert!(state.form.is_none());
    }

    #[tokio::test]
    async fn test_loading_flag_cleared_on_every_exit() {
        let (loader, _gate) = loader();

        loader.load(&locator("ok")).await.unwrap();
        assert!(!loader.is_loading());

        let _ = loader.load(&locator("transport")).await;
        assert!(!loader.is_loading());

        let _ = loader.load(&locator("parse")).await;
        assert!(!loader.is_loading());
    }

    #[tokio::test]
    async fn test_edit_form_without_grid_is_noop() {
        let (loader, _gate) = loader();
        assert!(loader.edit_form(|form| form.set_name("x")).is_none());
    }
}
