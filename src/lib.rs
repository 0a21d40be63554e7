pub mod clean;
pub mod error;
pub mod fetch;
pub mod ingest;
pub mod letters;
pub mod lookup;
pub mod output;
pub mod record;
pub mod stats;
