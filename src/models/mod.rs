pub mod collection;
pub mod raw;
pub mod vacancy;
