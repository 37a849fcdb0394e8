use folio_protocol::{CardList, CardView, EmptyView, LinkView};

use crate::filter::compute_visible;
use crate::model::{Project, ProjectStore, QueryState};

/// Per-card stagger for the external reveal animation: card index × this.
pub const REVEAL_DELAY_STEP_MS: u32 = 60;

/// Cards show at most this many tag chips.
pub const TAG_LIMIT: usize = 3;

/// Map a category key to its display label. Unknown keys degrade to a
/// default label instead of failing.
pub fn category_label(key: &str) -> &'static str {
    match key {
        "frontend" => "Frontend",
        "ai" => "AI Demo",
        "production" => "Production",
        _ => "Project",
    }
}

/// Project the filtered store into the rendering-ready card list.
///
/// The output is recomputed from scratch on every render and handed to the
/// DOM-sync collaborator; nothing here mutates the store or the state.
pub fn render_cards(store: &ProjectStore, state: &QueryState) -> CardList {
    let visible = compute_visible(store.projects(), state);

    if visible.is_empty() {
        return CardList::Empty(EmptyView {
            title: "No matches".into(),
            badge: "Tip".into(),
            hint: "Try a different keyword or switch filters.".into(),
        });
    }

    let cards = visible
        .iter()
        .enumerate()
        .map(|(index, project)| card_view(project, index))
        .collect();
    CardList::Cards { cards }
}

fn card_view(project: &Project, index: usize) -> CardView {
    CardView {
        title: project.title.clone(),
        category_label: category_label(&project.category).to_owned(),
        description: project.description.clone(),
        links: project
            .links
            .iter()
            .map(|link| LinkView {
                label: link.label.clone(),
                url: link.url.clone(),
            })
            .collect(),
        tags: project.tags.iter().take(TAG_LIMIT).cloned().collect(),
        reveal_delay_ms: index as u32 * REVEAL_DELAY_STEP_MS,
    }
}
