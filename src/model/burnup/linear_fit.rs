use crate::common::*;

#[doc = r#"
    First-degree polynomial `y = slope * x + intercept` fitted by least squares.

    When every `x` is identical the normal equations are singular; the fit then takes
    the minimum-norm least-squares solution over unit-norm design columns, which
    still passes through the mean of the points. Projections from such a fit
    are numerically valid but usually meaningless.
"#]
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct LinearFit {
    slope: f64,
    intercept: f64,
}

impl LinearFit {
    #[doc = "Fits `points` given as `(x, y)`. Returns `None` when `points` is empty."]
    pub fn least_squares(points: &[(f64, f64)]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let n: f64 = points.len() as f64;
        let mean_x: f64 = points.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y: f64 = points.iter().map(|(_, y)| y).sum::<f64>() / n;

        let sxx: f64 = points.iter().map(|(x, _)| (x - mean_x).powi(2)).sum();
        let sxy: f64 = points
            .iter()
            .map(|(x, y)| (x - mean_x) * (y - mean_y))
            .sum();

        if sxx.abs() < f64::EPSILON {
            return Some(Self::singular_fit(mean_x, mean_y));
        }

        let slope: f64 = sxy / sxx;

        Some(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    #[doc = r#"
        Minimum-norm solution when every `x` equals `c`, taken after scaling each design
        column (`x` and `1`) to unit norm the way polynomial fitting routines do.
        Both scaled columns are then the same vector, so the solution splits `mean_y`
        evenly: `slope = mean_y / (2c)`, `intercept = mean_y / 2`.
        A zero `x` column carries no weight and the fit is the constant `mean_y`.
    "#]
    fn singular_fit(c: f64, mean_y: f64) -> Self {
        if c.abs() < f64::EPSILON {
            return Self {
                slope: 0.0,
                intercept: mean_y,
            };
        }

        Self {
            slope: mean_y / (2.0 * c),
            intercept: mean_y / 2.0,
        }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}
