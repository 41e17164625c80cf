use crate::domain::model::Lead;
use crate::domain::ports::LeadStore;
use crate::utils::error::{GuardError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Supabase REST 風格的 /rest/v1/leads 資源
pub struct SupabaseLeads {
    base_url: String,
    key: String,
    client: Client,
}

impl SupabaseLeads {
    pub fn new(base_url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            key: key.into(),
            client: Client::new(),
        }
    }

    fn leads_url(&self) -> String {
        format!("{}/rest/v1/leads", self.base_url)
    }
}

#[async_trait]
impl LeadStore for SupabaseLeads {
    async fn submit(&self, lead: &Lead) -> Result<()> {
        tracing::debug!("Submitting lead to {}", self.leads_url());

        let response = self
            .client
            .post(self.leads_url())
            .header("apikey", &self.key)
            .header("Authorization", format!("Bearer {}", self.key))
            .header("Prefer", "return=minimal")
            .json(lead)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GuardError::LeadStoreError {
                message: format!("HTTP {}: {}", status.as_u16(), body),
            });
        }

        tracing::info!("📨 Lead submitted");
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<Lead>> {
        let response = self
            .client
            .get(self.leads_url())
            .query(&[("select", "*")])
            .header("apikey", &self.key)
            .header("Authorization", format!("Bearer {}", self.key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GuardError::LeadStoreError {
                message: format!("HTTP {}", status.as_u16()),
            });
        }

        let leads: Vec<Lead> = response.json().await.map_err(|e| GuardError::LeadStoreError {
            message: format!("Malformed response: {}", e),
        })?;

        tracing::debug!("Fetched {} leads", leads.len());
        Ok(leads)
    }
}
