pub mod league;
pub mod scheduling;
pub mod seeding;
pub mod server;

pub use league::LeagueService;
pub use scheduling::{SchedulingError, SchedulingService};
pub use seeding::SeedingService;
pub use server::ServerService;
