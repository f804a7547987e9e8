use crate::common::*;

#[doc = "What each of the independent pipelines produced in one run"]
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct RunOutcome {
    pub burnup_chart: Option<PathBuf>,
    pub personal_reports_ok: bool,
    pub team_report_ok: bool,
    /* a configuration error stopped the run before the time reports */
    pub aborted: bool,
}
