pub mod back;
pub mod cancel;
pub mod completions;
pub mod delete;
pub mod finish;
pub mod init;
pub mod list;
pub mod prune;
pub mod resume;
pub mod start;
pub mod status;
pub mod sync;
