pub mod args;

pub use args::{parse_flag, Args};
