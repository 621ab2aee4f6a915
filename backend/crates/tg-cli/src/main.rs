//! tg - token gate operator CLI
//!
//! # Examples
//!
//! ```bash
//! # Create a user, then mint tokens for them
//! tg add-user --username alice --password wonderland --email alice@example.com
//! tg issue alice --pretty
//!
//! # Check a refresh token
//! tg inspect <token> --refresh
//! ```

use tg_auth::TokenClass;
use tg_cli::{Cli, CliResult, Commands, add_user, inspect_token, issue_tokens, token_settings};
use tg_config::Config;
use tg_db::UserRepository;

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("Error loading .env: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli.command, cli.pretty).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, pretty: bool) -> CliResult<ExitCode> {
    let config = Config::load()?;

    match command {
        Commands::Issue { username } => {
            let pair = issue_tokens(&token_settings(&config)?, &username)?;
            Ok(print(&pair, pretty))
        }
        Commands::Inspect { token, refresh } => {
            let class = TokenClass::from_refresh_flag(refresh);
            let report = inspect_token(&token_settings(&config)?, &token, class)?;
            let code = print(&report, pretty);
            Ok(if report.valid { code } else { ExitCode::FAILURE })
        }
        Commands::AddUser {
            username,
            password,
            email,
        } => {
            let pool = tg_db::open_pool(&config.database_path()?).await?;
            tg_db::run_migrations(&pool).await?;
            let user = add_user(&UserRepository::new(pool.clone()), &username, &password, &email)
                .await;
            pool.close().await;
            Ok(print(&user?, pretty))
        }
    }
}

fn print<T: Serialize>(value: &T, pretty: bool) -> ExitCode {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
    }
}
