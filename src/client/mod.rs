pub mod file;
pub mod sender;
pub mod stdout;
pub mod worker;
