//! Session management CLI commands: list and delete.
//!
//! Provides session browsing with rich tables and deletion with a
//! confirmation prompt.

use anyhow::{bail, Context, Result};
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;
use dialoguer::Confirm;

use confab_core::chat::repository::ChatRepository;
use confab_core::user::repository::UserRepository;
use confab_types::chat::SessionId;

use crate::state::AppState;

/// List past sessions for a user with title, creation date, and message count.
///
/// # Examples
///
/// ```bash
/// confab sessions "auth0|abc123"
/// confab sessions "auth0|abc123" --json
/// ```
pub async fn list_sessions(state: &AppState, external_id: &str, json: bool) -> Result<()> {
    let Some(user) = state
        .user_directory
        .user_repo()
        .get_by_external_id(external_id)
        .await?
    else {
        bail!("No user found for '{external_id}'");
    };

    let sessions = state.chat_service.list_sessions(&user.id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&sessions)?);
        return Ok(());
    }

    let owner = if user.display_name.is_empty() {
        &user.external_id
    } else {
        &user.display_name
    };

    if sessions.is_empty() {
        println!();
        println!(
            "  {} No sessions found for '{}'.",
            style("i").blue().bold(),
            style(owner).cyan()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Title").fg(Color::White),
        Cell::new("Created").fg(Color::White),
        Cell::new("Messages").fg(Color::White),
        Cell::new("Session ID").fg(Color::White),
    ]);

    for session in &sessions {
        let title_display = if session.title.len() > 40 {
            format!("{}...", &session.title[..37])
        } else {
            session.title.clone()
        };

        let created = session.created_at.format("%Y-%m-%d %H:%M").to_string();

        let message_count = state
            .chat_service
            .chat_repo()
            .get_message_count(&session.id)
            .await?;

        table.add_row(vec![
            Cell::new(title_display).fg(Color::Cyan),
            Cell::new(created).fg(Color::White),
            Cell::new(message_count.to_string()).fg(Color::White),
            Cell::new(session.id.to_string()).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("  Sessions for '{}'", style(owner).cyan().bold());
    println!();
    println!("{table}");
    println!();
    println!(
        "  {} session{}",
        style(sessions.len()).bold(),
        if sessions.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

/// Delete a session with confirmation.
///
/// # Examples
///
/// ```bash
/// confab delete session <session-id>
/// confab delete session <session-id> --force
/// ```
pub async fn delete_session(state: &AppState, id: &str, force: bool, json: bool) -> Result<()> {
    let session_id: SessionId = id
        .parse()
        .with_context(|| format!("Invalid session id '{id}'"))?;

    let Some(session) = state.chat_service.get_session(&session_id).await? else {
        bail!("Session '{id}' not found");
    };

    let message_count = state
        .chat_service
        .chat_repo()
        .get_message_count(&session_id)
        .await?;

    if !force && !json {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete session '{}' ({} messages)?",
                style(&session.title).red().bold(),
                message_count
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    state.chat_service.delete_session(&session_id).await?;

    if json {
        println!(
            "{}",
            serde_json::json!({"deleted": true, "session_id": session_id.to_string()})
        );
    } else {
        println!(
            "  {} Session '{}' deleted.",
            style("x").red().bold(),
            session.title
        );
    }

    Ok(())
}
