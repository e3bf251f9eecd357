pub mod alerts;
pub mod forecast;
pub mod health;
pub mod irrigation;
pub mod observation;
pub mod phenology;
pub mod schedule;
pub mod simulate;
pub mod stress;
pub mod sustainability;
pub mod water;

pub use observation::ObservationService;
