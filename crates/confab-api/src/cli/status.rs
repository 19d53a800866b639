//! Instance status dashboard command.

use anyhow::Result;
use console::style;

use confab_core::chat::repository::ChatRepository;
use confab_core::user::repository::UserRepository;

use crate::state::AppState;

/// Display instance status dashboard.
///
/// Shows user, session, and message counts plus provider and data dir info.
pub async fn status(state: &AppState, json: bool) -> Result<()> {
    let total_users = state.user_directory.user_repo().count_users().await?;
    let total_sessions = state.chat_service.chat_repo().count_sessions().await?;
    let total_messages = state.chat_service.chat_repo().count_messages().await?;

    if json {
        let status = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": state.data_dir.display().to_string(),
            "users": total_users,
            "sessions": total_sessions,
            "messages": total_messages,
            "provider_model": state.config.provider_model,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Confab v{}",
        style("⚡").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();

    println!("  {}", style("── Usage ──").dim());
    println!("  Users:    {}", style(total_users).bold());
    println!("  Sessions: {}", style(total_sessions).bold());
    println!("  Messages: {}", style(total_messages).bold());
    println!();

    println!("  {}", style("── Provider ──").dim());
    println!("  Model: {}", style(&state.config.provider_model).cyan());
    println!();

    println!("  {}", style("── System ──").dim());
    println!("  Data dir: {}", style(state.data_dir.display()).dim());
    println!("  Database: {}", style("SQLite (WAL mode)").dim());
    println!();

    Ok(())
}
