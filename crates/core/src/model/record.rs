use serde::{Deserialize, Serialize};

/// One project entry. Immutable after the store is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Display title; non-empty and unique within the store.
    pub title: String,
    /// Category key (e.g. "frontend", "ai", "production"). Unknown keys are
    /// legal data and fall back to a default display label.
    pub category: String,
    pub description: String,
    /// Anchors in display order.
    #[serde(default)]
    pub links: Vec<Link>,
    /// Tag strings in display order; rendering truncates to three.
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Project {
    /// Lower-cased, space-joined haystack for free-text matching: title,
    /// raw category key, description, tags, link labels. The translated
    /// category label is deliberately not part of it.
    pub fn haystack(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(3 + self.tags.len() + self.links.len());
        parts.push(&self.title);
        parts.push(&self.category);
        parts.push(&self.description);
        parts.extend(self.tags.iter().map(String::as_str));
        parts.extend(self.links.iter().map(|l| l.label.as_str()));
        parts.join(" ").to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haystack_joins_all_searchable_fields() {
        let p = Project {
            title: "ArabCard".into(),
            category: "production".into(),
            description: "Public-facing website.".into(),
            links: vec![Link {
                label: "Live".into(),
                url: "https://arabcard.net/".into(),
            }],
            tags: vec!["Responsive".into(), "Real users".into()],
        };
        let hay = p.haystack();
        assert_eq!(
            hay,
            "arabcard production public-facing website. responsive real users live"
        );
        assert!(hay.contains("arabcard"));
        assert!(hay.contains("real users"));
    }

    #[test]
    fn missing_links_and_tags_deserialize_empty() {
        let p: Project = serde_json::from_str(
            r#"{"title":"X","category":"frontend","description":"d"}"#,
        )
        .unwrap_or(Project {
            title: String::new(),
            category: String::new(),
            description: String::new(),
            links: vec![],
            tags: vec![],
        });
        assert_eq!(p.title, "X");
        assert!(p.links.is_empty());
        assert!(p.tags.is_empty());
    }
}
