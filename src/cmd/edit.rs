use anyhow::Result;
use async_trait::async_trait;
use clap::Args;
use emdir::client::factory::ClientFactory;
use emdir::config::ConfigArgs;
use emdir::types::employee::{EmployeeForm, EmployeeId};

use super::{EmployeeArgs, RunCommand};

/// Edit an employee. Fields not given keep their current value.
#[derive(Args)]
pub struct EditArgs {
    /// Id of the employee to edit.
    pub id: EmployeeId,

    #[command(flatten)]
    pub employee: EmployeeArgs,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[async_trait]
impl RunCommand for EditArgs {
    async fn run(&self) -> Result<()> {
        let ps = self.config.build_path_set()?;
        let api = ClientFactory::load(&ps)?.build_api()?;

        let current = api.get_employee_by_id(&self.id).await?;
        let mut form = EmployeeForm::from(current);
        self.employee.apply(&mut form);

        let message = api.update_employee(&form).await?;
        println!("{message}");
        Ok(())
    }
}
