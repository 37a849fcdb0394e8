use serde::{Deserialize, Serialize};

/// The rendering-ready projection of the filtered project list.
///
/// The core emits one `CardList` per render. Renderers (DOM sync layer,
/// terminal preview) consume it as-is; each card carries all the data it
/// needs, in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardList {
    /// At least one project matched; cards are in filtered order.
    Cards { cards: Vec<CardView> },
    /// Nothing matched; show the fixed no-matches copy instead.
    Empty(EmptyView),
}

impl CardList {
    pub fn len(&self) -> usize {
        match self {
            CardList::Cards { cards } => cards.len(),
            CardList::Empty(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CardList::Empty(_))
    }
}

/// One project card, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardView {
    pub title: String,
    /// Human-readable category label (already translated from the key).
    pub category_label: String,
    pub description: String,
    /// Anchor descriptors in display order; each opens a new browsing context.
    pub links: Vec<LinkView>,
    /// At most three tag chips, in display order.
    pub tags: Vec<String>,
    /// Staggered reveal delay: card index × fixed increment.
    pub reveal_delay_ms: u32,
}

/// An anchor descriptor within a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkView {
    pub label: String,
    pub url: String,
}

/// The designated empty-state card shown when no project matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyView {
    pub title: String,
    pub badge: String,
    pub hint: String,
}
