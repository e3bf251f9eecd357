pub mod health;
pub mod metrics;
pub mod phenology;
pub mod recommendation;
pub mod schedule;
pub mod weather;

pub use health::*;
pub use metrics::*;
pub use phenology::*;
pub use recommendation::*;
pub use schedule::*;
pub use weather::*;
