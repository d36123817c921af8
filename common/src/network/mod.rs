pub mod range;
pub mod spec;
