//! Filesystem storage for input records and generated artifacts.

mod fs_store;

pub use fs_store::FsRecordStore;
