mod command_result;
pub mod context;
pub mod extract;
pub mod import;
pub mod init;
pub mod validate;

pub use command_result::*;
