pub mod directory;
pub mod models;

pub use directory::PlayerDirectory;
pub use models::*;
