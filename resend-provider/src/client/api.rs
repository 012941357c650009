//! `ResendApi` trait implementation

use async_trait::async_trait;
use urlencoding::encode;

use crate::error::Result;
use crate::traits::{ErrorContext, ResendApi};
use crate::types::{ApiResponse, Attachment, Domain, ListEnvelope, ReceivedEmail};

use super::ResendClient;

// Bodies are kept as received; typed decoding happens in `ApiResponse::decode`.
#[async_trait]
impl ResendApi for ResendClient {
    async fn list_received_emails(
        &self,
        limit: u32,
    ) -> Result<ApiResponse<ListEnvelope<ReceivedEmail>>> {
        let raw = self
            .get(
                &format!("/emails/receiving?limit={limit}"),
                ErrorContext::default(),
            )
            .await?;
        Ok(ApiResponse::new(raw))
    }

    async fn get_received_email(&self, id: &str) -> Result<ApiResponse<ReceivedEmail>> {
        let raw = self
            .get(
                &format!("/emails/receiving/{}", encode(id)),
                ErrorContext::resource("email", id),
            )
            .await?;
        Ok(ApiResponse::new(raw))
    }

    async fn list_attachments(
        &self,
        email_id: &str,
    ) -> Result<ApiResponse<ListEnvelope<Attachment>>> {
        let raw = self
            .get(
                &format!("/emails/receiving/{}/attachments", encode(email_id)),
                ErrorContext::resource("email", email_id),
            )
            .await?;
        Ok(ApiResponse::new(raw))
    }

    async fn get_attachment(
        &self,
        email_id: &str,
        attachment_id: &str,
    ) -> Result<ApiResponse<Attachment>> {
        let raw = self
            .get(
                &format!(
                    "/emails/receiving/{}/attachments/{}",
                    encode(email_id),
                    encode(attachment_id)
                ),
                ErrorContext::resource("attachment", attachment_id),
            )
            .await?;
        Ok(ApiResponse::new(raw))
    }

    async fn list_domains(&self) -> Result<ApiResponse<ListEnvelope<Domain>>> {
        let raw = self.get("/domains", ErrorContext::default()).await?;
        Ok(ApiResponse::new(raw))
    }

    async fn get_domain(&self, domain_id: &str) -> Result<ApiResponse<Domain>> {
        let raw = self
            .get(
                &format!("/domains/{}", encode(domain_id)),
                ErrorContext::resource("domain", domain_id),
            )
            .await?;
        Ok(ApiResponse::new(raw))
    }
}
