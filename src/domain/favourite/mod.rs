pub mod repository;

pub use repository::FavouriteRepository;
