use crate::common::*;

use crate::utils_modules::time_utils::*;

#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct ReportQuery {
    pub since: NaiveDate,
    pub until: NaiveDate,
    pub user_id: Option<String>,
}

impl ReportQuery {
    #[doc = "Query parameters shared by every Toggl reports endpoint"]
    pub fn to_query_params(&self, workspace: &str, user_agent: &str) -> Vec<(String, String)> {
        let mut params: Vec<(String, String)> = vec![
            ("workspace_id".to_string(), workspace.to_string()),
            ("since".to_string(), convert_date_to_str(self.since)),
            ("until".to_string(), convert_date_to_str(self.until)),
            ("user_agent".to_string(), user_agent.to_string()),
        ];

        if let Some(user_id) = &self.user_id {
            params.push(("user_ids".to_string(), user_id.clone()));
        }

        params
    }
}
