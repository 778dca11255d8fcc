pub mod repository;

pub use repository::TagRepository;
