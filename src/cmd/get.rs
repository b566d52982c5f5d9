use anyhow::Result;
use async_trait::async_trait;
use clap::Args;
use emdir::client::factory::ClientFactory;
use emdir::config::ConfigArgs;
use emdir::display::{display_json, DisplayStyle};
use emdir::types::employee::EmployeeId;

use super::{OutputArgs, RunCommand};

/// Show one employee by id.
#[derive(Args)]
pub struct GetArgs {
    /// Id of the employee.
    pub id: EmployeeId,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[async_trait]
impl RunCommand for GetArgs {
    async fn run(&self) -> Result<()> {
        let ps = self.config.build_path_set()?;
        let api = ClientFactory::load(&ps)?.build_api()?;

        let employee = api.get_employee_by_id(&self.id).await?;
        if matches!(self.output.output, DisplayStyle::Json) {
            return display_json(employee);
        }
        self.output.display(vec![employee])
    }
}
