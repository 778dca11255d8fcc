mod follow;
mod service;
mod unfollow;

pub use follow::FollowUserCommand;
pub use service::ProfileCommandService;
pub use unfollow::UnfollowUserCommand;
