//! End-to-end pipeline scenarios over the built-in seed store.

use folio_core::filter::{compute_visible, matches};
use folio_core::model::{ProjectStore, QueryState};
use folio_core::views::{REVEAL_DELAY_STEP_MS, render_cards};
use folio_protocol::CardList;

fn seed() -> ProjectStore {
    ProjectStore::seed().unwrap_or_else(|e| panic!("seed store: {e}"))
}

fn state(filter: &str, query: &str) -> QueryState {
    let mut state = QueryState::new();
    state.set_filter(filter);
    state.set_query(Some(query));
    state
}

fn visible_titles(store: &ProjectStore, state: &QueryState) -> Vec<String> {
    compute_visible(store.projects(), state)
        .iter()
        .map(|p| p.title.clone())
        .collect()
}

#[test]
fn default_state_shows_all_five_in_order() {
    let store = seed();
    let titles = visible_titles(&store, &QueryState::new());
    assert_eq!(
        titles,
        [
            "Notion Table Replica",
            "GitHub Portfolio",
            "Hugging Face Demos",
            "ArabCard",
            "MECA Engineering (Example Page)",
        ]
    );
}

#[test]
fn everything_matches_the_default_state() {
    let store = seed();
    let state = QueryState::new();
    for project in store.projects() {
        assert!(matches(project, &state), "{} should match", project.title);
    }
}

#[test]
fn ai_filter_yields_exactly_the_hugging_face_demos() {
    let store = seed();
    let titles = visible_titles(&store, &state("ai", ""));
    assert_eq!(titles, ["Hugging Face Demos"]);
}

#[test]
fn production_query_matches_category_key_across_all() {
    let store = seed();
    let titles = visible_titles(&store, &state("all", "production"));
    assert_eq!(titles, ["ArabCard", "MECA Engineering (Example Page)"]);
}

#[test]
fn frontend_filter_with_notion_query_is_exact() {
    let store = seed();
    let titles = visible_titles(&store, &state("frontend", "notion"));
    assert_eq!(titles, ["Notion Table Replica"]);
}

#[test]
fn query_case_and_whitespace_are_normalized() {
    let store = seed();
    assert_eq!(
        visible_titles(&store, &state("all", "ARABCARD")),
        visible_titles(&store, &state("all", "  arabcard ")),
    );
}

#[test]
fn matched_records_respect_the_category_filter() {
    let store = seed();
    let s = state("production", "");
    for project in compute_visible(store.projects(), &s) {
        assert_eq!(project.category, "production");
    }
}

#[test]
fn no_match_renders_the_empty_state() {
    let store = seed();
    let list = render_cards(&store, &state("all", "zzzznotfound"));
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    match list {
        CardList::Empty(empty) => assert_eq!(empty.title, "No matches"),
        CardList::Cards { .. } => panic!("expected the empty state"),
    }
}

#[test]
fn full_render_staggers_reveal_delays() {
    let store = seed();
    match render_cards(&store, &QueryState::new()) {
        CardList::Cards { cards } => {
            assert_eq!(cards.len(), 5);
            assert_eq!(cards[2].reveal_delay_ms, 2 * REVEAL_DELAY_STEP_MS);
            for (i, card) in cards.iter().enumerate() {
                assert_eq!(card.reveal_delay_ms, i as u32 * REVEAL_DELAY_STEP_MS);
                assert!(card.tags.len() <= 3);
            }
        }
        CardList::Empty(_) => panic!("expected all five cards"),
    }
}

#[test]
fn seed_category_labels_translate() {
    let store = seed();
    match render_cards(&store, &QueryState::new()) {
        CardList::Cards { cards } => {
            let labels: Vec<&str> = cards.iter().map(|c| c.category_label.as_str()).collect();
            assert_eq!(
                labels,
                ["Frontend", "Frontend", "AI Demo", "Production", "Production"]
            );
        }
        CardList::Empty(_) => panic!("expected cards"),
    }
}
