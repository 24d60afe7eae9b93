#![deny(unsafe_op_in_unsafe_fn)]

pub mod badges;
pub mod error;
pub mod log;
pub mod plugin;
pub mod query;
pub mod report;
pub mod util;
