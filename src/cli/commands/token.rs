use anyhow::Context;
use clap::Subcommand;
use serde_json::json;

use crate::auth::{issue_token, Claims, TokenVerifier};
use crate::cli::OutputFormat;
use crate::config;

#[derive(Subcommand)]
pub enum TokenCommands {
    #[command(about = "Sign a bearer token for a user id with JWT_SECRET")]
    Issue {
        #[arg(help = "Value of the `id` claim")]
        id: String,
        #[arg(long, help = "Hours until expiry (defaults to SECURITY_JWT_EXPIRY_HOURS)")]
        expiry_hours: Option<u64>,
        #[arg(long, conflicts_with = "expiry_hours", help = "Issue a token without `exp`")]
        no_expiry: bool,
    },

    #[command(about = "Check a token against JWT_SECRET and print its claims")]
    Verify {
        #[arg(help = "Token, with or without the `Bearer ` prefix")]
        token: String,
    },
}

pub fn handle(cmd: TokenCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let security = &config::config().security;

    match cmd {
        TokenCommands::Issue { id, expiry_hours, no_expiry } => {
            let expiry = if no_expiry {
                None
            } else {
                Some(expiry_hours.unwrap_or(security.jwt_expiry_hours))
            };
            let claims = Claims::new(id, expiry)?;
            let token = issue_token(&claims, &security.jwt_secret).context("failed to issue token")?;

            match output_format {
                OutputFormat::Json => println!("{}", json!({ "token": token, "claims": claims })),
                OutputFormat::Text => println!("{}", token),
            }
            Ok(())
        }
        TokenCommands::Verify { token } => {
            let verifier = TokenVerifier::hs256(&security.jwt_secret)?;
            let token = token.strip_prefix("Bearer ").unwrap_or(&token);

            match verifier.verify(token) {
                Ok(claims) => {
                    match output_format {
                        OutputFormat::Json => println!("{}", json!({ "valid": true, "claims": claims })),
                        OutputFormat::Text => println!("valid: id={}", claims.id),
                    }
                    Ok(())
                }
                Err(reason) => {
                    if output_format == OutputFormat::Json {
                        println!("{}", json!({ "valid": false, "reason": reason.to_string() }));
                    }
                    anyhow::bail!("token rejected: {}", reason)
                }
            }
        }
    }
}
