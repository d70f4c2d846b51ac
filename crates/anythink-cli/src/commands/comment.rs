//! Comment command
//!
//! List, add, update and delete comments without going through HTTP.

use anyhow::{Context, Result};
use anythink_core::comment::{CommentGateway, CommentPayload};
use anythink_core::config::Config;
use anythink_core::types::CommentId;
use clap::Subcommand;

/// Comment subcommands
#[derive(Debug, Subcommand)]
pub enum CommentCommand {
    /// List all comments
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a comment
    Add {
        /// Comment text
        #[arg(long)]
        text: Option<String>,

        /// Comment author
        #[arg(long)]
        author: Option<String>,

        /// Output the created comment as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace a comment's text and author
    Update {
        /// Comment ID
        id: String,

        /// New text
        #[arg(long)]
        text: Option<String>,

        /// New author
        #[arg(long)]
        author: Option<String>,

        /// Output the updated comment as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a comment
    Delete {
        /// Comment ID
        id: String,

        /// Skip confirmation
        #[arg(long, short)]
        yes: bool,
    },
}

/// Execute the comment command
pub fn execute(cmd: CommentCommand, config: Config) -> Result<()> {
    let gateway = super::open_gateway(&config.storage)?;

    match cmd {
        CommentCommand::List { json } => list_comments(&gateway, json),
        CommentCommand::Add { text, author, json } => {
            add_comment(&gateway, CommentPayload { text, author }, json)
        }
        CommentCommand::Update {
            id,
            text,
            author,
            json,
        } => update_comment(&gateway, &id, CommentPayload { text, author }, json),
        CommentCommand::Delete { id, yes } => delete_comment(&gateway, &id, yes),
    }
}

fn list_comments(gateway: &CommentGateway, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let comments = gateway.list().context("Failed to fetch comments")?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&comments)?);
        return Ok(());
    }

    if comments.is_empty() {
        println!("No comments found.");
        return Ok(());
    }

    println!("{}", "Comments:".bold().underline());
    println!();

    for comment in &comments {
        println!(
            "  {} {}: {}",
            comment.id.to_string().green(),
            comment.author.cyan(),
            comment.text
        );
    }

    Ok(())
}

fn add_comment(gateway: &CommentGateway, payload: CommentPayload, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let comment = gateway.create(payload).context("Failed to create comment")?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&comment)?);
    } else {
        println!("{} Created comment {}", "✓".green(), comment.id.to_string().cyan());
    }

    Ok(())
}

fn update_comment(
    gateway: &CommentGateway,
    id: &str,
    payload: CommentPayload,
    as_json: bool,
) -> Result<()> {
    use colored::Colorize;

    let comment = gateway
        .update(&CommentId::from(id), payload.into_update())
        .context(format!("Failed to update comment '{}'", id))?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&comment)?);
    } else {
        println!("{} Updated comment {}", "✓".green(), comment.id.to_string().cyan());
    }

    Ok(())
}

fn delete_comment(gateway: &CommentGateway, id: &str, yes: bool) -> Result<()> {
    use colored::Colorize;

    if !yes {
        use dialoguer::Confirm;

        let confirmed = Confirm::new()
            .with_prompt(format!("Delete comment {}?", id))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    gateway
        .delete(&CommentId::from(id))
        .context(format!("Failed to delete comment '{}'", id))?;
    println!("{} Comment '{}' deleted.", "✓".green(), id);

    Ok(())
}
