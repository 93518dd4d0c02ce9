mod catalog;
mod ids;
mod phase;
mod sentence;
mod settings;

pub use catalog::{ALL_SCOPE, Catalog, CatalogError, Category, Scope};
pub use ids::CategoryId;
pub use phase::{PhaseFrame, PhaseState};
pub use sentence::SentencePair;
pub use settings::{
    DEFAULT_ADVANCE_GAP_MS, DEFAULT_PROMPT_MS, DEFAULT_REVEAL_FIRST_MS, DEFAULT_REVEAL_SECOND_MS,
    PhaseTimings, SettingsError,
};
