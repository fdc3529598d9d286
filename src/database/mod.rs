pub mod connection;
pub mod matches;
pub mod players;
pub mod seed;
pub mod setup;
pub mod store;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use seed::{load_seed, seed_database, SeedData};
pub use store::{MatchStore, PlayerSource, SqliteStore};
