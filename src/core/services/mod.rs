pub mod bootstrap;
pub mod socket;

pub use bootstrap::*;
pub use socket::*;
