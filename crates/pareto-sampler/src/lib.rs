//! Pareto sampling by inverse transform.
//!
//! A [`ParetoSampler`] turns uniform deviates from any [`UniformSource`] into
//! Pareto-distributed values via `scale / u^(1/shape)`.

pub mod error;
pub mod pareto;
pub mod rand_source;
pub mod replay;
pub mod source;

pub use error::SamplerError;
pub use pareto::ParetoSampler;
pub use rand_source::RandSource;
pub use replay::ReplaySource;
pub use source::UniformSource;
