use crate::dto::trend_estimate::*;
use crate::model::burnup::snapshot::*;

#[doc = r#"
    Result of the trend estimation.

    A single persisted snapshot cannot carry a trend, which is a valid outcome rather
    than an error; the chart is then drawn without the forecast.
"#]
#[derive(Debug, Clone, PartialEq)]
pub enum TrendOutcome {
    Forecast(TrendEstimate),
    NoForecast { current: Snapshot },
}

impl TrendOutcome {
    pub fn estimate(&self) -> Option<&TrendEstimate> {
        match self {
            TrendOutcome::Forecast(estimate) => Some(estimate),
            TrendOutcome::NoForecast { .. } => None,
        }
    }
}
