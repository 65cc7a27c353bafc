use crate::source::UniformSource;

/// Replays a pre-recorded sequence of uniforms, wrapping around at the end.
///
/// Values are returned exactly as recorded; nothing is checked against
/// `(0, 1)`. Useful for deterministic tests and for feeding deviates that
/// were produced elsewhere.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    values: Vec<f64>,
    pos: usize,
}

impl ReplaySource {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "replay sequence must not be empty");
        Self { values, pos: 0 }
    }

    /// Index of the value the next draw will return.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<f64>> for ReplaySource {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl UniformSource for ReplaySource {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        let u = self.values[self.pos];
        self.pos = (self.pos + 1) % self.values.len();
        u
    }

    fn describe(&self) -> String {
        format!("ReplaySource(len={}, pos={})", self.values.len(), self.pos)
    }
}
