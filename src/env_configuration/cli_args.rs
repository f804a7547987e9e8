use crate::common::*;

use crate::utils_modules::time_utils::*;

#[doc = "Days between the default start date and the default end date"]
const DEFAULT_REPORT_SPAN_DAYS: i64 = 7;

#[derive(Debug, Clone, Parser)]
#[command(name = "scrum_report_automation")]
#[command(
    about = "Downloads and generates the burnup chart, the individual reports, and the team report.",
    long_about = None
)]
pub struct CliArgs {
    /// Directory that receives the chart folder, the per-user folders and the team log.
    #[arg(short = 'p', long = "path", default_value = "./Scrumban Reports")]
    pub path: PathBuf,

    /// Start date of the reports (YYYY-MM-DD). Defaults to 7 days before the end date.
    #[arg(short = 's', long = "since", value_parser = parse_date_str)]
    pub since: Option<NaiveDate>,

    /// End date of the reports (YYYY-MM-DD). Defaults to today.
    #[arg(short = 'u', long = "until", value_parser = parse_date_str)]
    pub until: Option<NaiveDate>,

    /// Name of the Trello list whose cards count as done.
    #[arg(short = 'b', long = "board", default_value = "Done")]
    pub board: String,

    /// Number of most recent points used by the burnup linear regression.
    #[arg(
        short = 'r',
        long = "regression",
        default_value_t = 4,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub regression: u16,
}

impl CliArgs {
    #[doc = "Resolved `(since, until)` pair, applying the date defaults relative to `today`"]
    pub fn date_range(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let until: NaiveDate = self.until.unwrap_or(today);
        let since: NaiveDate = self
            .since
            .unwrap_or_else(|| minus_days(today, DEFAULT_REPORT_SPAN_DAYS));

        (since, until)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn defaults_match_the_weekly_run() {
        let args: CliArgs = CliArgs::try_parse_from(["scrum_report_automation"]).unwrap();

        assert_eq!(args.path, PathBuf::from("./Scrumban Reports"));
        assert_eq!(args.board, "Done");
        assert_eq!(args.regression, 4);
        assert_eq!(
            args.date_range(ymd(2018, 10, 16)),
            (ymd(2018, 10, 9), ymd(2018, 10, 16))
        );
    }

    #[test]
    fn explicit_flags_override_defaults() {
        let args: CliArgs = CliArgs::try_parse_from([
            "scrum_report_automation",
            "-s",
            "2018-10-10",
            "-u",
            "2018-10-16",
            "-b",
            "Shipped",
            "-r",
            "6",
            "-p",
            "/tmp/reports",
        ])
        .unwrap();

        assert_eq!(args.board, "Shipped");
        assert_eq!(args.regression, 6);
        assert_eq!(args.path, PathBuf::from("/tmp/reports"));
        assert_eq!(
            args.date_range(ymd(2030, 1, 1)),
            (ymd(2018, 10, 10), ymd(2018, 10, 16))
        );
    }

    #[test]
    fn rejects_zero_window_and_bad_dates() {
        assert!(CliArgs::try_parse_from(["scrum_report_automation", "-r", "0"]).is_err());
        assert!(CliArgs::try_parse_from(["scrum_report_automation", "-s", "10/10/2018"]).is_err());
    }
}
