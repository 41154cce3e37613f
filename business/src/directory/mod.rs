//! Client-side user directory: state, its single writer, and the read-side
//! helpers the presentation layer derives its lists and cards from.

mod filter;
mod sequence;
mod state;
mod store;
mod summary;

pub use filter::UserFilter;
pub use sequence::{RequestSequence, Ticket};
pub use state::{DirectoryState, PageMeta, total_pages_for};
pub use store::{DirectoryStore, DirectoryView};
pub use summary::DirectorySummary;
