pub mod helper;
pub mod init;
pub mod insert;
pub mod lookup;
pub mod refresh;
mod command_result;

pub use command_result::*;
