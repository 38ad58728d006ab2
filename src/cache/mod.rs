mod key;
mod session;
mod structs;

pub use key::ResourceKey;
pub use session::{Ticket, ViewSession};
pub use structs::QueryCache;
