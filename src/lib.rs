//! Simulated-annealing experiments for the Euclidean Traveling Salesman
//! Problem.
//!
//! Given a set of 2-D sites, the crate searches for a low-cost cyclic
//! visiting order with simulated annealing. It is built for
//! experimentation: several independent randomized runs execute
//! concurrently, each sweeping a set of cooling schedules, and their
//! outcomes land in a shared results log for later comparison.
//!
//! - [`instance`]: points-file loading and the normalized pairwise distance
//!   matrix shared read-only by every run.
//! - [`sa`]: the annealing engine — pluggable cooling schedules, the
//!   reversal/relocation perturbation operator, Metropolis acceptance, and
//!   the per-schedule annealing loop.
//! - [`experiment`]: the concurrent multi-run harness with its trajectory
//!   and results outputs.
//!
//! # Architecture
//!
//! Distances are normalized by the largest pairwise distance before
//! annealing, so temperatures are expressed in `[0, 1]` cost units and the
//! floor temperature can sit far below any real cost difference; reported
//! costs are rescaled back to original units on the way out.

pub mod experiment;
pub mod instance;
pub mod sa;
