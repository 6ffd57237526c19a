pub mod history;
pub mod navigation;

pub use history::{parse_fragment, DeepLink, History, HistoryEntry, PopEvent, SessionHistory};
pub use navigation::{Direction, NavigationState, View};
