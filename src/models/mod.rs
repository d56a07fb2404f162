pub mod budget;
pub mod network;
pub mod result;
pub mod state;
pub mod verdict;

pub use budget::*;
pub use network::*;
pub use result::*;
pub use state::*;
pub use verdict::*;
