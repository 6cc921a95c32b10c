use bookshelf_auth::Role;
use bookshelf_cli::admin;
use bookshelf_config::DatabaseConfig;
use bookshelf_db::{SqlitePool, init_db_pool};
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "bookshelf-cli")]
#[command(about = "Bookshelf CLI - Administrative tools for Bookshelf", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new administrator account
    CreateAdmin {
        /// Username
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Grant the admin role to an existing user
    Promote {
        username: String,
    },
    /// Revoke the admin role from a user
    Demote {
        username: String,
    },
    /// List all accounts and their roles
    ListUsers,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let pool = match init_db_pool(&DatabaseConfig::from_env()).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    let cli = Cli::parse();

    match cli.command {
        Commands::CreateAdmin { username, password } => {
            handle_create_admin(&pool, username, password).await
        }
        Commands::Promote { username } => handle_set_role(&pool, &username, Role::Admin).await,
        Commands::Demote { username } => handle_set_role(&pool, &username, Role::User).await,
        Commands::ListUsers => handle_list_users(&pool).await,
    }
}

async fn handle_create_admin(
    pool: &SqlitePool,
    username: Option<String>,
    password: Option<String>,
) {
    let username = match username {
        Some(username) => username,
        None => match Input::<String>::new().with_prompt("Username").interact_text() {
            Ok(username) => username,
            Err(e) => exit_with("Failed to read username", e),
        },
    };

    let password = match password {
        Some(password) => password,
        None => match Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
        {
            Ok(password) => password,
            Err(e) => exit_with("Failed to read password", e),
        },
    };

    match admin::create_admin(pool, &username, &password).await {
        Ok(user) => {
            println!("\n✅ Admin created successfully!");
            println!("   Username: {}", user.username);
        }
        Err(e) => exit_with("Error creating admin", e),
    }
}

async fn handle_set_role(pool: &SqlitePool, username: &str, role: Role) {
    match admin::set_role(pool, username, role).await {
        Ok(user) => println!("✅ {} is now {}", user.username, user.role),
        Err(e) => exit_with("Error updating role", e),
    }
}

async fn handle_list_users(pool: &SqlitePool) {
    match admin::list_users(pool).await {
        Ok(users) if users.is_empty() => println!("No users found"),
        Ok(users) => {
            println!("{:<6} {:<50} {}", "ID", "USERNAME", "ROLE");
            for user in users {
                println!("{:<6} {:<50} {}", user.id, user.username, user.role);
            }
        }
        Err(e) => exit_with("Error listing users", e),
    }
}

fn exit_with(context: &str, err: impl std::fmt::Display) -> ! {
    eprintln!("\n❌ {}: {}", context, err);
    std::process::exit(1);
}
