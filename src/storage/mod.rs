// JSON-file backed storage for entities

pub mod local_repository;
pub mod mirror;

pub use local_repository::LocalRepository;
pub use mirror::MirrorFile;
