use serde::Deserialize;
use thiserror::Error;

/// Reasons a list of keyframes is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("curve has no keyframes")]
    Empty,
    #[error("curve keyframe {index} is not finite")]
    NonFinite { index: usize },
    #[error("curve keyframe {index} is not strictly after the previous one")]
    Unordered { index: usize },
}

/// Piecewise-linear remap curve.
///
/// Keyframes are `(x, y)` pairs with strictly increasing `x`. Evaluation
/// outside the keyed range holds the first/last value. Deserializes from a
/// TOML array of pairs, e.g. `[[0.0, 0.0], [1.0, 1.0]]`, and is validated
/// while loading so a malformed curve never reaches the step path.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<[f32; 2]>")]
pub struct Curve {
    keys: Vec<(f32, f32)>,
}

impl Curve {
    pub fn new(keys: Vec<(f32, f32)>) -> Result<Self, CurveError> {
        if keys.is_empty() {
            return Err(CurveError::Empty);
        }
        for (index, &(x, y)) in keys.iter().enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(CurveError::NonFinite { index });
            }
            if index > 0 && x <= keys[index - 1].0 {
                return Err(CurveError::Unordered { index });
            }
        }
        Ok(Self { keys })
    }

    /// `y = x` over [0, 1].
    pub fn identity() -> Self {
        Self {
            keys: vec![(0.0, 0.0), (1.0, 1.0)],
        }
    }

    pub fn constant(value: f32) -> Self {
        Self {
            keys: vec![(0.0, value)],
        }
    }

    /// Straight line from `(0, start)` to `(end_x, end)`.
    pub fn ramp(end_x: f32, start: f32, end: f32) -> Self {
        if end_x > 0.0 {
            Self {
                keys: vec![(0.0, start), (end_x, end)],
            }
        } else {
            Self::constant(end)
        }
    }

    pub fn evaluate(&self, x: f32) -> f32 {
        let (first_x, first_y) = self.keys[0];
        if x <= first_x {
            return first_y;
        }
        for pair in self.keys.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            if x <= x1 {
                let t = (x - x0) / (x1 - x0);
                return y0 + (y1 - y0) * t;
            }
        }
        self.keys[self.keys.len() - 1].1
    }
}

impl TryFrom<Vec<[f32; 2]>> for Curve {
    type Error = CurveError;

    fn try_from(pairs: Vec<[f32; 2]>) -> Result<Self, Self::Error> {
        Curve::new(pairs.into_iter().map(|[x, y]| (x, y)).collect())
    }
}
