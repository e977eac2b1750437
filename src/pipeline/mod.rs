pub mod activity;
pub mod batch;
pub mod file;
pub mod parse;
pub mod trackpoint;
