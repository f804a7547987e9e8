#[doc = "PDF documents downloaded per user from the Toggl reports API"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TogglReportKind {
    Detailed,
    Summary,
}

impl TogglReportKind {
    pub fn endpoint(&self) -> &'static str {
        match self {
            TogglReportKind::Detailed => "details.pdf",
            TogglReportKind::Summary => "summary.pdf",
        }
    }

    #[doc = "`<until>-details.pdf` / `<until>-summary.pdf`"]
    pub fn file_name(&self, until: &str) -> String {
        match self {
            TogglReportKind::Detailed => format!("{}-details.pdf", until),
            TogglReportKind::Summary => format!("{}-summary.pdf", until),
        }
    }
}
