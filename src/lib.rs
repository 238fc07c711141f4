pub mod cli;
pub mod config;
pub mod constants;
pub mod entropy;
pub mod generate;
pub mod human_size;
pub mod io;
pub mod survey;
pub mod timestamp;
pub mod tree;

pub use generate::generate;
