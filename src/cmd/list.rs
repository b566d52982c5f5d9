use anyhow::Result;
use async_trait::async_trait;
use clap::Args;
use emdir::client::factory::ClientFactory;
use emdir::config::ConfigArgs;
use emdir::directory::EmployeeList;

use super::{OutputArgs, RunCommand};

/// List employees, optionally only those of one department.
#[derive(Args)]
pub struct ListArgs {
    /// Only show employees of this department. Empty shows everyone.
    #[arg(short, long)]
    pub department: Option<String>,

    /// Print the distinct departments instead of the employees.
    #[arg(long)]
    pub departments: bool,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[async_trait]
impl RunCommand for ListArgs {
    async fn run(&self) -> Result<()> {
        let ps = self.config.build_path_set()?;
        let api = ClientFactory::load(&ps)?.build_api()?;

        let list = EmployeeList::new(api.list_employees().await?);

        if self.departments {
            for department in list.departments() {
                println!("{department}");
            }
            return Ok(());
        }

        let employees = list
            .filter(self.department.as_deref())
            .into_iter()
            .cloned()
            .collect();
        self.output.display(employees)
    }
}
