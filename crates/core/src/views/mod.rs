pub mod cards;

pub use cards::{REVEAL_DELAY_STEP_MS, TAG_LIMIT, category_label, render_cards};
