//! whassup CLI: list chats and print chat histories from a WhatsApp msgstore.db.
//! Config from env (.env supported) and optional CLI args.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use whassup_cli::render::{chat_line, message_line, sender_label};
use whassup_cli::{Cli, Commands, WhassupConfig};
use whassup_core::{init_tracing, FsProbe, MessageRecord};
use whassup_storage::MessageRepository;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = WhassupConfig::load(cli.db, cli.media_dir)?;
    init_tracing(config.log_file.as_deref())?;

    let repo = MessageRepository::open(&config.db_path)
        .with_context(|| format!("Open message store {}", config.db_path.display()))?;
    let probe = config.probe();

    match cli.command {
        Commands::Chats { json } => handle_chats(&repo, json),
        Commands::History {
            chat,
            limit,
            json,
            raw,
        } => handle_history(&repo, &probe, &chat, limit, json, raw),
        Commands::Recent { limit, raw } => handle_recent(&repo, &probe, limit, raw),
        Commands::Show { id } => handle_show(&repo, &probe, id),
    }
}

fn handle_chats(repo: &MessageRepository, json: bool) -> Result<()> {
    let chats = repo.chats().context("Query chats")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&chats)?);
        return Ok(());
    }
    if chats.is_empty() {
        println!("No chats.");
        return Ok(());
    }

    println!("{:<40} {:<7} {:>7}  {}", "chat", "kind", "count", "last message");
    println!("{}", "-".repeat(80));
    for chat in &chats {
        println!("{}", chat_line(chat));
    }
    Ok(())
}

fn handle_history(
    repo: &MessageRepository,
    probe: &FsProbe,
    chat: &str,
    limit: Option<u32>,
    json: bool,
    raw: bool,
) -> Result<()> {
    let messages = repo
        .messages_for_chat(chat, limit)
        .with_context(|| format!("Query messages for chat {}", chat))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&messages)?);
        return Ok(());
    }
    if messages.is_empty() {
        println!("No messages for chat {}.", chat);
        return Ok(());
    }
    print_messages(&messages, probe, raw);
    Ok(())
}

fn handle_recent(repo: &MessageRepository, probe: &FsProbe, limit: u32, raw: bool) -> Result<()> {
    let messages = repo.recent_messages(limit).context("Query recent messages")?;
    for m in &messages {
        println!("{:<40} {}", m.chat_key().unwrap_or("-"), message_line(m, probe, raw));
    }
    Ok(())
}

fn handle_show(repo: &MessageRepository, probe: &FsProbe, id: i64) -> Result<()> {
    let Some(m) = repo.message_by_id(id).context("Query message")? else {
        anyhow::bail!("no message with _id {}", id);
    };
    info!("Showing message {}", id);

    println!("id:           {}", m.id());
    println!("chat:         {}", m.chat_key().unwrap_or("-"));
    println!("kind:         {}", chat_kind(&m));
    println!("direction:    {}", if m.is_received() { "received" } else { "sent" });
    println!("status:       {:?}", m.message_status());
    if let Some(event) = m.group_event() {
        println!("group event:  {:?}", event);
    }
    println!("sender:       {}", sender_label(&m));
    if let Some(owner) = m.owner_id() {
        println!("owner:        {}", owner);
    }
    if let Some(recipients) = m.recipients() {
        let list: Vec<String> = recipients.iter().map(ToString::to_string).collect();
        println!("recipients:   {} (partial)", list.join(", "));
    }
    println!("time:         {}", m.timestamp().to_rfc3339());
    println!("text:         {}", m.filtered_text().unwrap_or_default());
    if !m.media().is_empty() {
        println!("media:        {}", m.media());
        println!("media on disk: {}", m.has_media_attached(probe));
    }
    if let Some((lat, lon)) = m.location() {
        println!("location:     {}, {}", lat, lon);
    }
    Ok(())
}

fn chat_kind(m: &MessageRecord) -> &'static str {
    if m.is_group_message() {
        "group"
    } else if m.is_direct_message() {
        "direct"
    } else {
        "unknown"
    }
}

fn print_messages(messages: &[MessageRecord], probe: &FsProbe, raw: bool) {
    for m in messages {
        println!("{}", message_line(m, probe, raw));
    }
}
