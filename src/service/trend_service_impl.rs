use crate::common::*;

use crate::errors::report_error::*;

use crate::model::burnup::{linear_fit::*, snapshot::*, timeseries::*};

use crate::dto::trend_estimate::*;

use crate::enums::trend_outcome::*;

use crate::traits::service_traits::trend_service::*;

use crate::utils_modules::time_utils::*;

#[derive(Debug, Clone, Default, new)]
pub struct TrendServiceImpl;

impl TrendServiceImpl {
    #[doc = "Trailing `min(regression_window, len)` snapshots of a date-sorted slice"]
    fn regression_window(snapshots: &[Snapshot], regression_window: usize) -> &[Snapshot] {
        let window_size: usize = regression_window.min(snapshots.len());
        &snapshots[snapshots.len() - window_size..]
    }
}

impl TrendService for TrendServiceImpl {
    fn estimate(
        &self,
        series: &Timeseries,
        regression_window: usize,
    ) -> anyhow::Result<TrendOutcome> {
        if regression_window == 0 {
            return Err(anyhow!(ReportError::Config(
                "regression window must be at least 1".to_string()
            )));
        }

        let current: Snapshot = series.latest().ok_or(ReportError::InsufficientData {
            required: 1,
            actual: 0,
        })?;

        let snapshots: Vec<Snapshot> = series.snapshots();

        if snapshots.len() == 1 {
            info!("Only one burnup point available, skipping the trend line");
            return Ok(TrendOutcome::NoForecast { current });
        }

        let window: &[Snapshot] = Self::regression_window(&snapshots, regression_window);

        /* done count -> numeric date */
        let points: Vec<(f64, f64)> = window
            .iter()
            .map(|snapshot| (snapshot.done as f64, date_to_num(snapshot.date)))
            .collect();

        let fit: LinearFit = LinearFit::least_squares(&points).ok_or(
            ReportError::InsufficientData {
                required: 1,
                actual: 0,
            },
        )?;

        let projected_finish_days: f64 = fit.evaluate(current.scope as f64);
        let projected_finish_date: NaiveDate = num_to_date(projected_finish_days)
            .ok_or(ReportError::Projection(projected_finish_days))?;

        debug!(
            "Trend over {} points: slope {:.4} days/card, finish {}",
            window.len(),
            fit.slope(),
            projected_finish_date
        );

        Ok(TrendOutcome::Forecast(TrendEstimate::new(
            fit,
            projected_finish_days,
            projected_finish_date,
            window.to_vec(),
            current,
        )))
    }
}
