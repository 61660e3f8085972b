pub mod explorer;
pub mod snapshot;
