use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use portal_authz::authz::{resolver, AccessCheck, Claim, Principal, ScopeMode};
use portal_authz::jwt::{JwtConfig, TokenIdentity};
use portal_authz::models::scope::{CheckResponse, CheckSummary, ScopeResponse};

#[derive(Parser, Debug)]
#[command(author, version, about = "portal authorization tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve scopes for a set of claims against the given claim types
    Resolve {
        /// Claims in Type=Value form
        #[arg(long = "claim", value_parser = parse_claim)]
        claims: Vec<Claim>,
        /// Comma-separated claim types that qualify
        #[arg(long, value_delimiter = ',')]
        required: Vec<String>,
        /// restricted or viewing
        #[arg(long, default_value = "restricted")]
        mode: String,
    },
    /// Resolve a named check (e.g. server-admin) for a set of claims
    Check {
        slug: String,
        #[arg(long = "claim", value_parser = parse_claim)]
        claims: Vec<Claim>,
    },
    /// List the named checks
    Checks,
    /// Print the game types that grant game server management
    GameServers {
        #[arg(long = "claim", value_parser = parse_claim)]
        claims: Vec<Claim>,
    },
    /// Sign a development token using JWT_SECRET
    MintToken {
        #[arg(long)]
        subject: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long = "claim", value_parser = parse_claim)]
        claims: Vec<Claim>,
    },
}

fn main() -> anyhow::Result<()> {
    if dotenv().is_err() {
        let crate_env = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(".env");
        let _ = dotenvy::from_path(crate_env);
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { claims, required, mode } => {
            let mode: ScopeMode = mode.parse()?;
            let principal = Principal::new("cli").with_claims(claims);
            let scope = mode.resolve(&principal, &required);
            print_json(&ScopeResponse::new(mode, required, scope))?;
        }
        Commands::Check { slug, claims } => {
            let check = AccessCheck::from_slug(&slug)
                .with_context(|| format!("unknown check '{slug}', run `checks` to list them"))?;
            let principal = Principal::new("cli").with_claims(claims);
            print_json(&CheckResponse::new(check, check.resolve(&principal)))?;
        }
        Commands::Checks => {
            let checks: Vec<CheckSummary> = AccessCheck::ALL.into_iter().map(CheckSummary::from).collect();
            print_json(&checks)?;
        }
        Commands::GameServers { claims } => {
            print_json(&resolver::game_types_for_game_servers(&claims))?;
        }
        Commands::MintToken { subject, name, email, claims } => {
            let config = JwtConfig::from_env()?;
            let mut identity = TokenIdentity::new(subject).with_claims(claims);
            if let Some(name) = name {
                identity = identity.with_name(name);
            }
            if let Some(email) = email {
                identity = identity.with_email(email);
            }
            println!("{}", config.encode(&identity)?);
        }
    }

    Ok(())
}

fn parse_claim(input: &str) -> Result<Claim, String> {
    Claim::parse(input).map_err(|err| err.to_string())
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{out}");
    Ok(())
}
