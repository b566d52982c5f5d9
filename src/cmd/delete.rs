use anyhow::Result;
use async_trait::async_trait;
use clap::Args;
use emdir::client::factory::ClientFactory;
use emdir::config::ConfigArgs;
use emdir::directory::EmployeeList;
use emdir::types::employee::EmployeeId;

use super::{OutputArgs, RunCommand};

/// Delete an employee, then show the remaining list.
#[derive(Args)]
pub struct DeleteArgs {
    /// Id of the employee to delete.
    pub id: EmployeeId,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[async_trait]
impl RunCommand for DeleteArgs {
    async fn run(&self) -> Result<()> {
        let ps = self.config.build_path_set()?;
        let api = ClientFactory::load(&ps)?.build_api()?;

        let mut list = EmployeeList::new(api.list_employees().await?);

        let message = api.delete_employee(&self.id).await?;
        list.remove(&self.id);

        eprintln!("{message}");
        self.output.display(list.into_employees())
    }
}
