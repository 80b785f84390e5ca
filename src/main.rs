use std::sync::Arc;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use role_test_helper::config::HelperConfig;
use role_test_helper::gate::ActivationGate;
use role_test_helper::status::HelperStatus;
use role_test_helper::{logging, login_chain};
use role_test_helper_core::{Host, Resolution};

#[derive(Parser)]
#[command(name = "role-test-helper")]
#[command(
    about = "Role Test Helper - log in as any registered role on non-production sites",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show whether the helper is active and which roles are registered
    Status {
        /// Print the status as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a login attempt through the authentication chain
    Login {
        /// Username; use a registered role name to trigger the bypass
        username: String,

        /// Password for the stock credential check
        #[arg(short, long, default_value = "")]
        password: String,

        /// Print the resolved user as JSON
        #[arg(long)]
        json: bool,
    },
    /// List registered role names
    Roles,
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    logging::init();

    let cli = Cli::parse();
    let host = Arc::new(HelperConfig::from_env().into_host());

    match cli.command {
        Commands::Status { json } => {
            let gate = ActivationGate::new(Arc::clone(&host));
            let status = HelperStatus::collect(&gate);
            if json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                println!("{status}");
            }
        }
        Commands::Login {
            username,
            password,
            json,
        } => {
            let chain = login_chain(Arc::clone(&host));
            let resolution = chain.authenticate(&username, &password);

            for notice in host.notices() {
                println!("notice: {notice}");
            }

            match resolution {
                Resolution::Authenticated(user) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&user)?);
                    } else {
                        println!(
                            "Logged in as '{}' with roles: {}",
                            user.login,
                            user.roles.join(", ")
                        );
                    }
                }
                Resolution::Failed(failure) => {
                    println!("Login failed: {failure}");
                    std::process::exit(1);
                }
                Resolution::Unresolved => {
                    println!("Login failed: no handler resolved the attempt");
                    std::process::exit(1);
                }
            }
        }
        Commands::Roles => {
            for role in host.role_names() {
                println!("{role}");
            }
        }
    }

    Ok(())
}
