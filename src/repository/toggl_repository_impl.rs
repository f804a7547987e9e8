use crate::common::*;

use crate::errors::report_error::*;

use crate::model::configs::toggl_config::*;

use crate::dto::{report_query::*, toggl::summary_report::*};

use crate::enums::toggl_report_kind::*;

use crate::traits::repository_traits::time_tracking_repository::*;

#[doc = "Toggl reports API (v2) client authenticated with `(<api key>, \"api_token\")` basic auth"]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct TogglRepositoryImpl {
    client: Client,
    toggl_config: TogglConfig,
}

impl TogglRepositoryImpl {
    fn reports_url(&self, endpoint: &str) -> String {
        format!(
            "{}/reports/api/v2/{}",
            self.toggl_config.base_url.trim_end_matches('/'),
            endpoint
        )
    }

    #[doc = "Common logic: authenticated GET with the report query and a status check"]
    async fn send_report_request(
        &self,
        endpoint: &str,
        query: &ReportQuery,
    ) -> anyhow::Result<Response> {
        let url: String = self.reports_url(endpoint);
        let params: Vec<(String, String)> =
            query.to_query_params(&self.toggl_config.workspace, &self.toggl_config.user_agent);

        let response: Response = self
            .client
            .get(&url)
            .basic_auth(&self.toggl_config.api_key, Some("api_token"))
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                ReportError::ExternalService(format!(
                    "[TogglRepositoryImpl->send_report_request] request to {} failed: {}",
                    url, e
                ))
            })?;

        let status: StatusCode = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let error_body: String = response.text().await.unwrap_or_default();
            Err(anyhow!(ReportError::ExternalService(format!(
                "[TogglRepositoryImpl->send_report_request] {} responded {}: {}",
                url, status, error_body
            ))))
        }
    }
}

#[async_trait]
impl TimeTrackingRepository for TogglRepositoryImpl {
    async fn download_report_pdf(
        &self,
        kind: TogglReportKind,
        query: &ReportQuery,
        destination: &Path,
    ) -> anyhow::Result<()> {
        let response: Response = self.send_report_request(kind.endpoint(), query).await?;

        let body = response.bytes().await.map_err(|e| {
            ReportError::ExternalService(format!(
                "[TogglRepositoryImpl->download_report_pdf] failed to read {} body: {}",
                kind.endpoint(),
                e
            ))
        })?;

        tokio::fs::write(destination, &body).await.with_context(|| {
            format!(
                "[TogglRepositoryImpl->download_report_pdf] cannot write {:?}",
                destination
            )
        })?;

        Ok(())
    }

    async fn get_summary_report(&self, query: &ReportQuery) -> anyhow::Result<SummaryReport> {
        let response: Response = self.send_report_request("summary", query).await?;

        let summary: SummaryReport = response.json::<SummaryReport>().await.map_err(|e| {
            ReportError::ExternalService(format!(
                "[TogglRepositoryImpl->get_summary_report] malformed summary response: {}",
                e
            ))
        })?;

        Ok(summary)
    }
}
