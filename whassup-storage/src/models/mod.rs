mod chat_summary;

pub use chat_summary::ChatSummary;
