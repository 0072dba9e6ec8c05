//! Command-line surface.
//!
//! Without a subcommand the binary opens the sign-up form. Each subcommand
//! dispatches one intent, waits for the coordinator to settle and prints
//! every published action as a JSON line.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::action::{
    Action, ChatMessage, Credentials, Intent, NewAccount, SocialSignIn, UserQuery,
};
use crate::saga::{CoordinatorError, CoordinatorHandle};

#[derive(Debug, Parser)]
#[command(name = "yac")]
#[command(author, version, about = "Chat client sign-up and workflow runner", long_about = None)]
pub struct Cli {
    /// Config file (default: <config dir>/yac/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the user/message service base URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create an email/password account and its user record
    SignUp {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        username: Option<String>,
        /// Profile image URL
        #[arg(long)]
        image: Option<String>,
    },

    /// Sign in with email and password
    SignIn {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Sign in with a federated provider (GOOGLE, FACEBOOK, GITHUB)
    SignInSocial {
        #[arg(long)]
        provider: String,
    },

    /// Sign out of the identity backend
    SignOut,

    /// Look up a user record
    FetchUser {
        /// Lookup parameter as key=value; repeatable
        #[arg(long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// Post a chat message
    Post {
        #[arg(long)]
        channel: String,
        #[arg(long)]
        message: String,
        /// Author's user uid
        #[arg(long)]
        uid: String,
        #[arg(long)]
        username: String,
    },
}

impl Command {
    /// Intent dispatched for this command.
    pub fn into_intent(self) -> Intent {
        match self {
            Command::SignUp {
                email,
                password,
                first_name,
                last_name,
                username,
                image,
            } => Intent::CreateAccount(NewAccount {
                email: Some(email),
                password: Some(password),
                first_name,
                last_name,
                image,
                username,
            }),
            Command::SignIn { email, password } => {
                Intent::SignIn(Credentials::new(email, password))
            }
            Command::SignInSocial { provider } => Intent::SignInSocial(SocialSignIn { provider }),
            Command::SignOut => Intent::SignOut,
            Command::FetchUser { params } => Intent::FetchUser(
                params
                    .into_iter()
                    .fold(UserQuery::default(), |query, (key, value)| query.with(key, value)),
            ),
            Command::Post {
                channel,
                message,
                uid,
                username,
            } => Intent::PostMessage(ChatMessage {
                current_message: message,
                channel,
                user_uid: uid,
                username,
            }),
        }
    }
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected key=value, got '{}'", raw)),
    }
}

#[derive(Debug, Error)]
pub enum HeadlessError {
    #[error(transparent)]
    Dispatch(#[from] CoordinatorError),

    #[error("Failed to encode action: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Dispatch `intent` and stream every published action to `out` until the
/// coordinator is idle.
///
/// Returns `true` when any failure outcome was published.
pub async fn run_headless<W: Write>(
    coordinator: &CoordinatorHandle,
    intent: Intent,
    out: &mut W,
) -> Result<bool, HeadlessError> {
    let mut actions = coordinator.subscribe();
    coordinator.dispatch(intent)?;

    let mut failed = false;
    let idle = coordinator.wait_idle();
    tokio::pin!(idle);
    loop {
        tokio::select! {
            biased;
            Some(action) = actions.recv() => failed |= emit(out, &action)?,
            _ = &mut idle => break,
        }
    }
    while let Ok(action) = actions.try_recv() {
        failed |= emit(out, &action)?;
    }

    out.flush()?;
    Ok(failed)
}

fn emit<W: Write>(out: &mut W, action: &Action) -> Result<bool, HeadlessError> {
    serde_json::to_writer(&mut *out, action)?;
    out.write_all(b"\n")?;
    Ok(action.as_outcome().is_some_and(|outcome| outcome.is_failure()))
}
