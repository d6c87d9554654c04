//! Storage layer: analysed ideas persisted as JSON Lines.

mod error;
pub use error::StoreError;

mod jsonl;
pub use jsonl::IdeaStore;
