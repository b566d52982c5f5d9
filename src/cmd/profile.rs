use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;
use clap::{Args, Subcommand};
use emdir::client::factory::ClientFactory;
use emdir::config::ConfigArgs;
use emdir::display::display_json;
use emdir::guard::{Navigation, Route};
use emdir::types::employee::{EmployeeForm, ImageFile, ProfileUpdate};

use super::{hint_relogin, render_redirect, EmployeeArgs, RunCommand};

/// Own profile of the logged-in employee
#[derive(Args)]
pub struct ProfileCommand {
    #[command(subcommand)]
    pub command: ProfileCommands,
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    Show(ShowArgs),
    Update(UpdateArgs),
}

#[async_trait]
impl RunCommand for ProfileCommand {
    async fn run(&self) -> Result<()> {
        match &self.command {
            ProfileCommands::Show(args) => args.run().await,
            ProfileCommands::Update(args) => args.run().await,
        }
    }
}

/// Show the profile of the logged-in employee.
#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

#[async_trait]
impl RunCommand for ShowArgs {
    async fn run(&self) -> Result<()> {
        let ps = self.config.build_path_set()?;
        let (api, guard) = ClientFactory::load(&ps)?.build()?;

        match guard.check(Route::Profile)? {
            Navigation::Render(_) => {
                let employee = api.get_current_employee().await.map_err(hint_relogin)?;
                display_json(employee)
            }
            Navigation::Redirect(route) => render_redirect(&api, route).await,
        }
    }
}

/// Update the profile of the logged-in employee, optionally with a new picture.
#[derive(Args)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub employee: EmployeeArgs,

    /// Profile picture to upload, at most 1 MiB.
    #[arg(long)]
    pub image: Option<PathBuf>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[async_trait]
impl RunCommand for UpdateArgs {
    async fn run(&self) -> Result<()> {
        let ps = self.config.build_path_set()?;
        let (api, guard) = ClientFactory::load(&ps)?.build()?;

        if let Navigation::Redirect(route) = guard.check(Route::Profile)? {
            return render_redirect(&api, route).await;
        }

        let image = match self.image {
            Some(ref path) => Some(ImageFile::load(path)?),
            None => None,
        };

        let current = api.get_current_employee().await.map_err(hint_relogin)?;
        let mut form = EmployeeForm::from(current);
        self.employee.apply(&mut form);

        let message = api
            .update_profile(&ProfileUpdate { form, image })
            .await
            .map_err(hint_relogin)?;
        println!("{message}");
        Ok(())
    }
}
