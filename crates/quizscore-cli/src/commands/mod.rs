pub mod init;
pub mod list;
pub mod score;
pub mod validate;
