//! Command tree

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "resend", about = "Resend email API CLI", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage received emails (inbound)
    Email {
        #[command(subcommand)]
        command: Option<EmailCommand>,
    },

    /// Manage domains
    Domain {
        #[command(subcommand)]
        command: Option<DomainCommand>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum EmailCommand {
    /// List received emails (inbound)
    List {
        /// JSON output
        #[arg(short, long)]
        json: bool,

        /// Number of emails to retrieve
        #[arg(short, long, default_value_t = 10)]
        limit: u32,
    },

    /// Get received email details (inbound)
    Get {
        /// Email ID
        id: String,

        /// JSON output
        #[arg(short, long)]
        json: bool,
    },

    /// List attachments for a received email (inbound)
    Attachments {
        /// Email ID
        email_id: String,

        /// JSON output
        #[arg(short, long)]
        json: bool,
    },

    /// Get a specific attachment from a received email (inbound)
    Attachment {
        /// Email ID
        email_id: String,

        /// Attachment ID
        attachment_id: String,

        /// JSON output
        #[arg(short, long)]
        json: bool,

        /// Describe the attachment for this destination (the file is not written)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum DomainCommand {
    /// List domains
    List {
        /// JSON output
        #[arg(short, long)]
        json: bool,
    },

    /// Get domain details
    Get {
        /// Domain ID
        id: String,

        /// JSON output
        #[arg(short, long)]
        json: bool,
    },
}

/// A fully resolved leaf command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leaf {
    Email(EmailCommand),
    Domain(DomainCommand),
}

/// What a parsed invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print this help text and exit successfully.
    Help(String),
    Run(Leaf),
}

impl Cli {
    /// Resolves the parsed arguments; a missing command or subcommand
    /// resolves to the help of the level that was reached.
    pub fn into_invocation(self) -> Invocation {
        match self.command {
            None => Invocation::Help(help_for(None)),
            Some(Command::Email { command: None }) => Invocation::Help(help_for(Some("email"))),
            Some(Command::Domain { command: None }) => Invocation::Help(help_for(Some("domain"))),
            Some(Command::Email {
                command: Some(cmd),
            }) => Invocation::Run(Leaf::Email(cmd)),
            Some(Command::Domain {
                command: Some(cmd),
            }) => Invocation::Run(Leaf::Domain(cmd)),
        }
    }
}

/// Exit status for an argument parsing failure.
///
/// Help and version requests also arrive as parse errors and exit 0; real
/// usage errors exit 1 so they are not mistaken for a configuration error.
pub fn usage_exit_code(err: &clap::Error) -> u8 {
    u8::from(err.use_stderr())
}

fn help_for(group: Option<&str>) -> String {
    let mut cmd = Cli::command();
    // Propagates bin names so the usage line reads `resend email ...`
    cmd.build();
    if let Some(name) = group
        && let Some(sub) = cmd.find_subcommand_mut(name)
    {
        return sub.render_help().to_string();
    }
    cmd.render_help().to_string()
}
