use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::Args;
use console::Term;
use emdir::client::factory::ClientFactory;
use emdir::config::ConfigArgs;
use emdir::types::request::LoginRequest;

use super::RunCommand;

/// Log in as an employee. The issued token is kept for later commands.
#[derive(Args)]
pub struct LoginArgs {
    /// Email address of the employee.
    #[arg(short, long)]
    pub email: String,

    /// Password. Read from the terminal when omitted.
    #[arg(short, long)]
    pub password: Option<String>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[async_trait]
impl RunCommand for LoginArgs {
    async fn run(&self) -> Result<()> {
        let password = match self.password {
            Some(ref password) => password.clone(),
            None => {
                let term = Term::stderr();
                term.write_str("Password: ").context("write password prompt")?;
                term.read_secure_line().context("read password")?
            }
        };
        let req = LoginRequest {
            email_id: self.email.trim().to_string(),
            password,
        };

        let ps = self.config.build_path_set()?;
        let api = ClientFactory::load(&ps)?.build_api()?;

        let message = api.login_employee(&req).await?;
        println!("{message}");
        Ok(())
    }
}
