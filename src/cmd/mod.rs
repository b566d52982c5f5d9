mod config;
mod create;
mod delete;
mod edit;
mod get;
mod list;
mod login;
mod logout;
mod profile;

use anyhow::Result;
use async_trait::async_trait;
use clap::{Args, Parser, Subcommand};
use emdir::api::Api;
use emdir::client::ApiError;
use emdir::display::{self, DisplayStyle};
use emdir::guard::Route;
use emdir::types::employee::{Employee, EmployeeForm};

#[async_trait]
pub trait RunCommand {
    async fn run(&self) -> Result<()>;
}

/// Employee fields accepted by the create and edit commands. Fields left out
/// stay empty on create and unchanged on edit.
#[derive(Args, Debug, Clone)]
pub struct EmployeeArgs {
    /// Employee code, e.g. "E1024".
    #[arg(long)]
    pub code: Option<String>,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Contact number, exactly 10 digits.
    #[arg(long)]
    pub contact: Option<String>,

    #[arg(long)]
    pub department: Option<String>,
}

impl EmployeeArgs {
    pub fn apply(&self, form: &mut EmployeeForm) {
        let fields = [
            (&self.code, &mut form.employee_code),
            (&self.first_name, &mut form.first_name),
            (&self.last_name, &mut form.last_name),
            (&self.email, &mut form.email_id),
            (&self.contact, &mut form.contact_no),
            (&self.department, &mut form.department),
        ];
        for (arg, field) in fields {
            if let Some(value) = arg {
                *field = value.trim().to_string();
            }
        }
    }

    pub fn build_form(&self) -> EmployeeForm {
        let mut form = EmployeeForm::default();
        self.apply(&mut form);
        form
    }
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// The display style.
    #[arg(short, long, default_value = "table")]
    pub output: DisplayStyle,

    /// When displaying in CSV format, do not show the header row.
    #[arg(long)]
    pub headless: bool,

    /// When displaying in CSV format, manually specify the columns to display.
    #[arg(long)]
    pub csv_titles: Option<String>,
}

impl OutputArgs {
    pub fn display(&self, employees: Vec<Employee>) -> Result<()> {
        display::display_list(
            employees,
            self.output,
            self.headless,
            self.csv_titles.clone(),
        )
    }
}

/// Shows the view a refused navigation was redirected to.
async fn render_redirect(api: &Api, route: Route) -> Result<()> {
    eprintln!("Please login first, showing {route} instead");
    let employees = api.list_employees().await?;
    display::display_list(employees, DisplayStyle::Table, false, None)
}

/// Points the user at `login` when the server no longer accepts the stored token.
fn hint_relogin(err: ApiError) -> anyhow::Error {
    if err.is_unauthorized() {
        eprintln!("The server rejected your session, please login again");
    }
    err.into()
}

#[derive(Parser)]
#[command(author, version, about)]
pub struct App {
    /// Log level: error, warn, info or debug.
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Config(config::ShowConfigArgs),
    Create(create::CreateArgs),
    Delete(delete::DeleteArgs),
    Edit(edit::EditArgs),
    Get(get::GetArgs),
    List(list::ListArgs),
    Login(login::LoginArgs),
    Logout(logout::LogoutArgs),
    Profile(profile::ProfileCommand),
}

#[async_trait]
impl RunCommand for App {
    async fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Config(args) => args.run().await,
            Commands::Create(args) => args.run().await,
            Commands::Delete(args) => args.run().await,
            Commands::Edit(args) => args.run().await,
            Commands::Get(args) => args.run().await,
            Commands::List(args) => args.run().await,
            Commands::Login(args) => args.run().await,
            Commands::Logout(args) => args.run().await,
            Commands::Profile(args) => args.run().await,
        }
    }
}
