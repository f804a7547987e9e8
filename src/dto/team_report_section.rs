use crate::common::*;

use crate::utils_modules::time_utils::*;

pub const NO_HOURS_PLACEHOLDER: &str = "No hours recorded";
pub const NO_TASKS_PLACEHOLDER: &str = "No tasks worked on for this time period";

#[doc = r#"
    Formats a millisecond total as `Hh Mm`, rounding to the nearest minute.
    A zero or missing total yields the no-hours placeholder instead of `0h 0m`.
"#]
pub fn format_team_hours(total_ms: Option<u64>) -> String {
    match total_ms {
        Some(ms) if ms > 0 => {
            let total_minutes: u64 = (ms + 30_000) / 60_000;
            format!("{}h {}m", total_minutes / 60, total_minutes % 60)
        }
        _ => NO_HOURS_PLACEHOLDER.to_string(),
    }
}

#[doc = "One weekly section appended to the team log"]
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct TeamReportSection {
    pub week_start: NaiveDate,
    pub work_items: Vec<String>,
    pub total_ms: Option<u64>,
}

impl TeamReportSection {
    #[doc = "Markdown text of the section, starting with the blank lines that separate it from the previous one"]
    pub fn render(&self) -> String {
        let items: String = if self.work_items.is_empty() {
            format!("- {}", NO_TASKS_PLACEHOLDER)
        } else {
            self.work_items
                .iter()
                .map(|item| format!("- {}", item))
                .collect::<Vec<String>>()
                .join("\n")
        };

        format!(
            "\n\n---\n### Week of {}\n\n{}\n\n#### Total team hours: {}",
            convert_date_to_full_month_day(self.week_start),
            items,
            format_team_hours(self.total_ms)
        )
    }
}
