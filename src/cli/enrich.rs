//! `enrich` command: one live places lookup.

use anyhow::Result;
use clap::Args;

use crate::cli::{CommandContext, print_json};
use crate::enrichment::{EnrichmentClient, EnrichmentRequest};

/// Look up photos, contact details and reviews for a spa.
///
/// Prints the enrichment payload. A missing API key or failed request still
/// prints the degraded `{ "error": ..., "photos": [] }` shape and succeeds.
#[derive(Args, Debug)]
pub struct EnrichCommand {
    pub name: String,

    pub city: String,

    #[arg(long)]
    pub country: Option<String>,
}

impl EnrichCommand {
    pub async fn execute(self, ctx: &CommandContext) -> Result<()> {
        let client = EnrichmentClient::from_config(&ctx.config.places)?;
        let request = EnrichmentRequest::new(self.name, self.city, self.country);
        let enrichment = client.enrich(&request).await;
        print_json(&enrichment)
    }
}
