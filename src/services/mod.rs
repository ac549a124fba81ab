pub mod cache;
pub mod describe;
pub mod enrich;
pub mod log;
pub mod upstream;

pub use cache::*;
pub use describe::*;
pub use enrich::*;
pub use log::*;
pub use upstream::*;
