use crate::common::*;

#[doc = r#"
    Everything one run needs that is not a collaborator: output locations, the report
    date range, the done-list name and the regression window.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct RunOptions {
    pub today: NaiveDate,
    pub since: NaiveDate,
    pub until: NaiveDate,
    pub output_dir: PathBuf,
    pub chart_dir_name: String,
    pub team_log_file_name: String,
    pub done_list_name: String,
    pub regression_window: usize,
}

impl RunOptions {
    pub fn chart_dir(&self) -> PathBuf {
        self.output_dir.join(&self.chart_dir_name)
    }

    pub fn team_log_path(&self) -> PathBuf {
        self.output_dir.join(&self.team_log_file_name)
    }
}
