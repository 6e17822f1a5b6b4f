pub mod deploy;
pub mod init;
