use anyhow::Result;
use async_trait::async_trait;
use clap::Args;
use emdir::client::config::ClientConfig;
use emdir::config::ConfigArgs;
use emdir::display::display_json;

use super::RunCommand;

/// Display the client configuration in use, in JSON format.
#[derive(Args)]
pub struct ShowConfigArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

#[async_trait]
impl RunCommand for ShowConfigArgs {
    async fn run(&self) -> Result<()> {
        let cfg: ClientConfig = self.config.load("client")?;
        display_json(cfg)
    }
}
