//! Backup mirrors - secondary copies of individual posts.

mod backup_file;

pub use backup_file::FileBackupMirror;
