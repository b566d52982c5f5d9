use anyhow::Result;
use async_trait::async_trait;
use clap::Args;
use emdir::client::factory::ClientFactory;
use emdir::config::ConfigArgs;

use super::{EmployeeArgs, RunCommand};

/// Add a new employee. All fields are required.
#[derive(Args)]
pub struct CreateArgs {
    #[command(flatten)]
    pub employee: EmployeeArgs,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[async_trait]
impl RunCommand for CreateArgs {
    async fn run(&self) -> Result<()> {
        let form = self.employee.build_form();

        let ps = self.config.build_path_set()?;
        let api = ClientFactory::load(&ps)?.build_api()?;

        let message = api.register_employee(&form).await?;
        println!("{message}");
        Ok(())
    }
}
