pub mod collect;
pub mod estimate;
