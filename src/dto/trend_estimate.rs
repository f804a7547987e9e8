use crate::common::*;

use crate::model::burnup::{linear_fit::*, snapshot::*};

#[doc = r#"
    Completion forecast derived from the trailing regression window.

    `fit` maps a done count to a numeric date (days since 1970-01-01);
    `projected_finish_days` is that fit evaluated at the current scope and keeps its
    fractional part for plotting, `projected_finish_date` is the calendar day.
"#]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct TrendEstimate {
    pub fit: LinearFit,
    pub projected_finish_days: f64,
    pub projected_finish_date: NaiveDate,
    pub window: Vec<Snapshot>,
    pub current: Snapshot,
}
