use clap::{Parser, Subcommand};

use lathea_admin::{
    ApartmentRepository, ApiConfig, BackendClient, EmployeeRepository, ProjectRepository,
};

#[derive(Parser)]
#[command(name = "lathea-admin")]
#[command(about = "Admin console for the Lathea real-estate backend")]
struct Cli {
    /// Backend base URL
    #[arg(long, value_name = "URL", default_value = ApiConfig::DEFAULT_BASE_URL)]
    base_url: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List all projects
    Projects,
    /// List all apartments
    Apartments,
    /// List all employees
    Employees,
    /// Attach an apartment to a project
    Link {
        #[arg(value_name = "APARTMENT_ID")]
        apartment_id: i64,
        #[arg(value_name = "PROJECT_ID")]
        project_id: i64,
    },
    /// Delete an apartment
    DeleteApartment {
        #[arg(value_name = "ID")]
        id: i64,
    },
    /// Delete an employee
    DeleteEmployee {
        #[arg(value_name = "ID")]
        id: i64,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(
        if args.verbose { "debug" } else { "warn" },
    ))
    .init();

    let config = ApiConfig::new(&args.base_url);

    let Some(command) = args.command else {
        return open_dashboard(config);
    };

    let client = BackendClient::new(config);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_command(&client, command))
}

async fn run_command(client: &BackendClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Projects => {
            let projects = client.get_projects().await?;
            println!("{} project(s)", projects.len());
            for project in &projects {
                println!(
                    "  [{}] {} - {} ({})",
                    project.id,
                    project.name,
                    project.status,
                    project.location.as_deref().unwrap_or("no location"),
                );
            }
        }
        Command::Apartments => {
            let apartments = client.get_apartments().await?;
            println!("{} apartment(s)", apartments.len());
            for apartment in &apartments {
                match apartment.project_id {
                    Some(project_id) => println!(
                        "  [{}] {} - {} (project {})",
                        apartment.id, apartment.name, apartment.status, project_id,
                    ),
                    None => println!(
                        "  [{}] {} - {} (unassigned)",
                        apartment.id, apartment.name, apartment.status,
                    ),
                }
            }
        }
        Command::Employees => {
            let employees = client.get_employees().await?;
            println!("{} employee(s)", employees.len());
            for employee in &employees {
                println!(
                    "  [{}] {} <{}> {}",
                    employee.id,
                    employee.name,
                    employee.email,
                    employee.title.as_deref().unwrap_or(""),
                );
            }
        }
        Command::Link {
            apartment_id,
            project_id,
        } => {
            let apartment = client.link_to_project(apartment_id, project_id).await?;
            println!(
                "Linked apartment {} to project {}",
                apartment.id,
                apartment.project_id.unwrap_or(project_id),
            );
        }
        Command::DeleteApartment { id } => {
            client.delete_apartment(id).await?;
            println!("Deleted apartment {id}");
        }
        Command::DeleteEmployee { id } => {
            client.delete_employee(id).await?;
            println!("Deleted employee {id}");
        }
    }
    Ok(())
}

#[cfg(feature = "gui")]
fn open_dashboard(config: ApiConfig) -> anyhow::Result<()> {
    lathea_admin::gui::run(config)
}

#[cfg(not(feature = "gui"))]
fn open_dashboard(_config: ApiConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "this build has no dashboard; rebuild with `--features gui` or pass a subcommand (see --help)"
    )
}
