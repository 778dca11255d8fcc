mod add;
mod remove;
mod service;

pub use add::FavouriteArticleCommand;
pub use remove::UnfavouriteArticleCommand;
pub use service::FavouriteCommandService;
