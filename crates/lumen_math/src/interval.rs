/// A range of ray parameters or channel values.
///
/// `admits` treats it as half-open `(min, max]`; `clamp` uses the closed
/// `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if x is within the open-closed interval (min, max].
    ///
    /// This is the acceptance test for hit queries: the lower bound is an
    /// epsilon that must be excluded, the upper bound is the closest hit
    /// found so far.
    #[inline]
    pub fn admits(&self, x: f32) -> bool {
        self.min < x && x <= self.max
    }

    /// Clamps x to be within the interval [min, max].
    #[inline]
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// The unit interval [0, 1].
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };
}
