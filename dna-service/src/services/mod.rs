pub mod providers;
pub mod sequence;
