// tests/support/builders.rs
use chrono::Utc;

use kawaraban_core::domain::user::{Email, User, UserId, Username};

pub struct UserBuilder {
    id: i64,
    username: String,
    bio: Option<String>,
    image: Option<String>,
}

impl UserBuilder {
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            bio: None,
            image: None,
        }
    }

    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn build(self) -> User {
        User {
            id: UserId::new(self.id).unwrap(),
            username: Username::new(self.username.clone()).unwrap(),
            email: Email::new(format!("{}@example.com", self.username)).unwrap(),
            bio: self.bio,
            image: self.image,
            created_at: Utc::now(),
        }
    }
}
