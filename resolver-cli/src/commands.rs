use anyhow::Result;
use piped_resolver::{ResolverConfig, StreamResolver};
use serde_json::json;

use crate::cli::OutputFormat;

/// Executes CLI commands over a configured resolver.
pub struct CommandExecutor {
    config: ResolverConfig,
}

impl CommandExecutor {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub async fn resolve(&self, video_id: &str, output: OutputFormat) -> Result<()> {
        let resolver = StreamResolver::new(self.config.clone());
        let resolved = resolver.resolve(video_id).await?;

        match output {
            OutputFormat::Plain => println!("{}", resolved.url),
            OutputFormat::Json => {
                let value = json!({
                    "url": resolved.url,
                    "bitrate": resolved.bitrate,
                    "mimeType": resolved.mime_type,
                    "mirror": resolved.mirror,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
        }
        Ok(())
    }

    pub async fn mirrors(&self, output: OutputFormat) -> Result<()> {
        let resolver = StreamResolver::new(self.config.clone());
        let registry = resolver.registry();
        registry.ensure_populated().await;
        let ordered = registry.ordered();

        match output {
            OutputFormat::Plain => {
                for mirror in &ordered {
                    println!("{mirror}");
                }
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ordered)?),
        }
        Ok(())
    }
}
