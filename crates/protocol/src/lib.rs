pub mod cards;
pub mod theme;
pub mod toast;
pub mod types;

pub use cards::{CardList, CardView, EmptyView, LinkView};
pub use theme::{ThemeMode, ThemeToken};
pub use toast::Toast;
pub use types::Point;
