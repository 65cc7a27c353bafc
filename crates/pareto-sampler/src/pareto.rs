use crate::error::SamplerError;
use crate::source::UniformSource;
use std::fmt;

/// Samples a [Pareto distribution](https://en.wikipedia.org/wiki/Pareto_distribution)
/// by inverse transform: `scale / u^(1/shape)` for `u` uniform on `(0, 1)`.
///
/// The sampler is bound to a [`UniformSource`]. Bind a `&mut G` or a
/// `&RefCell<G>` to draw from a generator owned elsewhere; the lifetime of
/// the borrow keeps the sampler from outliving it.
///
/// `scale > 0` and `shape > 0` are checked once at construction and never
/// change afterwards. `1/shape` is precomputed so sampling is one draw, one
/// `powf` and one division.
#[derive(Debug, Clone)]
pub struct ParetoSampler<R> {
    scale: f64,
    shape: f64,
    one_over_shape: f64,
    rng: R,
}

impl<R: UniformSource> ParetoSampler<R> {
    /// Build a sampler bound to `rng`.
    ///
    /// Fails with [`SamplerError::InvalidArgument`] if `scale` or `shape` is
    /// not strictly positive (NaN included). `scale` is checked first.
    pub fn new(rng: R, scale: f64, shape: f64) -> Result<Self, SamplerError> {
        check_positive("scale", scale)?;
        check_positive("shape", shape)?;
        tracing::debug!(
            scale,
            shape,
            source = %rng.describe(),
            "pareto sampler created"
        );
        Ok(Self {
            scale,
            shape,
            one_over_shape: 1.0 / shape,
            rng,
        })
    }

    /// Same as [`ParetoSampler::new`].
    pub fn of(rng: R, scale: f64, shape: f64) -> Result<Self, SamplerError> {
        Self::new(rng, scale, shape)
    }

    /// Draw one uniform from the bound source and transform it.
    #[inline]
    pub fn sample(&mut self) -> f64 {
        let u = self.rng.next_uniform();
        self.sample_from(u)
    }

    /// Fill `out` with successive samples, one source draw per slot.
    pub fn fill(&mut self, out: &mut [f64]) {
        for value in out.iter_mut() {
            *value = self.sample();
        }
    }

    /// Label naming the sampling method and the bound source.
    pub fn describe(&self) -> String {
        format!(
            "[Inverse method for Pareto distribution {}]",
            self.rng.describe()
        )
    }
}

impl<R> ParetoSampler<R> {
    /// Transform an externally supplied uniform `u`.
    ///
    /// `u` is not validated. Values outside `(0, 1]` give whatever IEEE-754
    /// `powf` yields: `u == 0` is `+inf`, negative `u` is usually NaN.
    #[inline]
    pub fn sample_from(&self, u: f64) -> f64 {
        self.scale / u.powf(self.one_over_shape)
    }

    /// A new sampler with the same parameters, bound to `rng` instead.
    ///
    /// `self` keeps its own binding.
    pub fn rebind<S: UniformSource>(&self, rng: S) -> ParetoSampler<S> {
        tracing::debug!(
            scale = self.scale,
            shape = self.shape,
            source = %rng.describe(),
            "pareto sampler rebound"
        );
        ParetoSampler {
            scale: self.scale,
            shape: self.shape,
            one_over_shape: self.one_over_shape,
            rng,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn shape(&self) -> f64 {
        self.shape
    }

    pub fn source(&self) -> &R {
        &self.rng
    }

    pub fn source_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn into_source(self) -> R {
        self.rng
    }
}

impl<R: UniformSource> fmt::Display for ParetoSampler<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), SamplerError> {
    if value.is_nan() || value <= 0.0 {
        return Err(SamplerError::InvalidArgument { name, value });
    }
    Ok(())
}
