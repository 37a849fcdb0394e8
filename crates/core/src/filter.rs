//! The pure matcher and filter pipeline. No DOM, no side effects: a
//! function of (record, state) only, so it stays unit-testable headlessly.

use crate::model::{Filter, Project, QueryState};

/// Whether a project is included under the current filter + query.
///
/// Category test: `All` passes everything, otherwise the keys must be
/// equal. Text test: vacuously true for an empty (trimmed) query,
/// otherwise a case-insensitive substring match against the project's
/// haystack. Both must hold.
pub fn matches(project: &Project, state: &QueryState) -> bool {
    let in_filter = match &state.filter {
        Filter::All => true,
        Filter::Category(key) => project.category == *key,
    };

    let query = state.normalized_query();
    if query.is_empty() {
        return in_filter;
    }

    in_filter && project.haystack().contains(&query)
}

/// Stable filter over the store: original order preserved, every record
/// tested exactly once.
pub fn compute_visible<'a>(projects: &'a [Project], state: &QueryState) -> Vec<&'a Project> {
    projects.iter().filter(|p| matches(p, state)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Link;

    fn project(title: &str, category: &str) -> Project {
        Project {
            title: title.into(),
            category: category.into(),
            description: "desc".into(),
            links: vec![Link {
                label: "Repo".into(),
                url: "https://example.com".into(),
            }],
            tags: vec!["Tag one".into()],
        }
    }

    #[test]
    fn default_state_matches_everything() {
        let state = QueryState::new();
        for category in ["frontend", "ai", "production", "unheard-of"] {
            assert!(matches(&project("P", category), &state));
        }
    }

    #[test]
    fn category_filter_is_exact() {
        let mut state = QueryState::new();
        state.set_filter("ai");
        assert!(matches(&project("P", "ai"), &state));
        assert!(!matches(&project("P", "frontend"), &state));
    }

    #[test]
    fn query_is_case_insensitive_and_trimmed() {
        let p = project("ArabCard", "production");
        let mut upper = QueryState::new();
        upper.set_query(Some("  ARABCARD "));
        let mut lower = QueryState::new();
        lower.set_query(Some("arabcard"));
        assert_eq!(matches(&p, &upper), matches(&p, &lower));
        assert!(matches(&p, &upper));
    }

    #[test]
    fn query_searches_tags_and_link_labels() {
        let p = project("P", "frontend");
        let mut state = QueryState::new();
        state.set_query(Some("tag one"));
        assert!(matches(&p, &state));
        state.set_query(Some("repo"));
        assert!(matches(&p, &state));
        state.set_query(Some("absent"));
        assert!(!matches(&p, &state));
    }

    #[test]
    fn both_tests_must_hold() {
        let p = project("ArabCard", "production");
        let mut state = QueryState::new();
        state.set_filter("frontend");
        state.set_query(Some("arabcard"));
        assert!(!matches(&p, &state));
    }

    #[test]
    fn compute_visible_is_stable_and_idempotent() {
        let projects = vec![
            project("A", "frontend"),
            project("B", "ai"),
            project("C", "frontend"),
        ];
        let mut state = QueryState::new();
        state.set_filter("frontend");

        let first: Vec<&str> = compute_visible(&projects, &state)
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        let second: Vec<&str> = compute_visible(&projects, &state)
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(first, ["A", "C"]);
        assert_eq!(first, second);
    }
}
