//! Prompt construction for debate turns.
//!
//! - [`template::PromptTemplate`] — fixed message texts
//! - [`thread::HistoryThreadBuilder`] — builds the message list for a turn

pub mod template;
pub mod thread;
