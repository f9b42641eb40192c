//! Simulated Annealing (SA) over TSP instances.
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process: worsening moves are accepted with a probability that
//! decays with the temperature, letting the search escape local optima
//! early and descend greedily late. Temperature decay is pluggable via
//! [`CoolingSchedule`]; candidate tours come from a combined segment-
//! reversal / segment-relocation neighborhood.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod cooling;
mod perturb;
mod runner;

pub use config::SaConfig;
pub use cooling::{standard_schedules, CoolingSchedule, Cosine, Geometric, Linear};
pub use perturb::perturb;
pub use runner::{metropolis_accept, SaResult, SaRunner};
