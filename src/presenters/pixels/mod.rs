pub mod overlay;
pub mod presenter;
