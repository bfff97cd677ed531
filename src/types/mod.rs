pub mod auth;
pub mod photo;
pub mod post;

pub use auth::{JwtAuthResponse, LoginRequest, SignupRequest};
pub use photo::{Photo, PhotoPage};
pub use post::{Post, PostDraft};
