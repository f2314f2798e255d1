// Job ingestion: published sheet export → typed, newest-first JobRecords.
// Network access goes through source::SourceTransport only.

pub mod csv_line;
pub mod extract;
pub mod fallback;
pub mod handlers;
pub mod normalize;
pub mod parser;
pub mod pipeline;
pub mod source;
