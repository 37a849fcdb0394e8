mod renderer;

use anyhow::Result;
use folio_core::model::{ProjectStore, QueryState};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mut state = QueryState::new();
    if let Some(filter) = args.get(1) {
        state.set_filter(filter);
    }
    if let Some(query) = args.get(2) {
        state.set_query(Some(query));
    }

    let store = ProjectStore::seed()?;
    renderer::run_tui(&store, state)?;
    Ok(())
}
