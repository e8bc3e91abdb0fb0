pub mod snapshot;
pub mod writer;
