pub mod api;
pub mod config;
pub mod container;
pub mod db;
pub mod error;
pub mod state;
pub mod types;

pub use container::Container;
pub use error::ClientError;
pub use state::ViewState;
