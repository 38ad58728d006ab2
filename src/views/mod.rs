pub mod assembler;
pub mod models;
pub mod outcome;
pub mod roster;
pub mod route;
pub mod strength;
pub mod tier;

pub use assembler::{assemble_attendance, assemble_leaderboard, assemble_match, initial_route};
pub use models::*;
pub use outcome::{Outcome, Settlement, Winner, resolve};
pub use route::Route;
pub use strength::{RatingSource, aggregate};
pub use tier::{Tier, classify};
