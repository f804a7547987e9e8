use crate::common::*;

#[doc = r#"
    Subset of the Toggl summary report JSON used for the team log.

    `total_grand` is the total tracked time in milliseconds; Toggl sends `null`
    when nothing was tracked in the range.
"#]
#[derive(Debug, Clone, Default, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct SummaryReport {
    #[serde(default)]
    pub total_grand: Option<u64>,
    #[serde(default)]
    pub data: Vec<SummaryProject>,
}

#[derive(Debug, Clone, Default, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct SummaryProject {
    #[serde(default)]
    pub items: Vec<SummaryItem>,
}

#[derive(Debug, Clone, Default, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct SummaryItem {
    #[serde(default)]
    pub title: SummaryItemTitle,
}

#[derive(Debug, Clone, Default, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct SummaryItemTitle {
    #[serde(default)]
    pub time_entry: Option<String>,
}

impl SummaryReport {
    #[doc = "Distinct time-entry titles across all projects, in first-seen order"]
    pub fn work_items(&self) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();

        self.data
            .iter()
            .flat_map(|project| project.items.iter())
            .filter_map(|item| item.title.time_entry.as_deref())
            .filter(|title| seen.insert(*title))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_summary_and_deduplicates_titles() {
        let report: SummaryReport = serde_json::from_value(json!({
            "total_grand": 5400000,
            "data": [
                {
                    "title": {"project": "Capstone"},
                    "items": [
                        {"title": {"time_entry": "Sprint planning"}, "time": 3600000},
                        {"title": {"time_entry": "Burnup chart"}, "time": 900000}
                    ]
                },
                {
                    "title": {"project": "Docs"},
                    "items": [
                        {"title": {"time_entry": "Sprint planning"}, "time": 900000},
                        {"title": {}, "time": 0}
                    ]
                }
            ]
        }))
        .unwrap();

        assert_eq!(report.total_grand, Some(5_400_000));
        assert_eq!(report.work_items(), vec!["Sprint planning", "Burnup chart"]);
    }

    #[test]
    fn null_total_parses_as_none() {
        let report: SummaryReport =
            serde_json::from_value(json!({"total_grand": null, "data": []})).unwrap();

        assert_eq!(report.total_grand, None);
        assert!(report.work_items().is_empty());
    }
}
