//! Integration tests for rendering a chat history read from disk.
//!
//! Builds a temp `msgstore.db` and media directory, then renders lines the way `whassup history` does.

use std::fs::File;
use std::path::PathBuf;

use rusqlite::{params, Connection};
use serial_test::serial;
use tempfile::TempDir;
use whassup_cli::render::message_line;
use whassup_cli::WhassupConfig;
use whassup_storage::MessageRepository;

const DIRECT: &str = "4915773981234@s.whatsapp.net";

fn fixture() -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let db_path = dir.path().join("msgstore.db");
    let media_dir = dir.path().join("Media");
    std::fs::create_dir(&media_dir).expect("media dir");
    File::create(media_dir.join("IMG-20130113-WA0001.jpg")).expect("media file");

    let conn = Connection::open(&db_path).expect("open");
    conn.execute_batch(
        "CREATE TABLE messages (_id INTEGER PRIMARY KEY AUTOINCREMENT,
            key_remote_jid TEXT NOT NULL, key_from_me INTEGER, key_id TEXT NOT NULL,
            status INTEGER, data TEXT, timestamp INTEGER, media_url TEXT,
            media_mime_type TEXT, media_size INTEGER, media_name TEXT, remote_resource TEXT);",
    )
    .expect("schema");
    let insert = "INSERT INTO messages (key_remote_jid, key_from_me, key_id, status, data,
        timestamp, media_url, media_mime_type, media_size, media_name)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
    conn.execute(
        insert,
        params![DIRECT, 1, "k2", 5, None::<String>, 1358086790000i64,
            "https://mmg.whatsapp.net/d/f/AkQ.enc", "image/jpeg", 48213, "IMG-20130113-WA0001.jpg"],
    )
    .expect("insert");
    conn.execute(
        insert,
        params![DIRECT, 0, "k1", 0, "Hallo \u{E057}", 1358086780000i64,
            None::<String>, None::<String>, 0, None::<String>],
    )
    .expect("insert");

    (dir, db_path, media_dir)
}

/// **Test: Render a direct chat with a photo present in the media directory.**
///
/// **Setup:** msgstore.db with an inbound text and an outbound photo; the photo exists under Media/.
/// **Action:** Load config with `--db` and `--media-dir`, query the chat, render each line.
/// **Expected:** Chronological lines; sender number then `me`; text filtered; photo marked present.
#[test]
#[serial]
fn test_render_history_with_media_dir() {
    let (_dir, db_path, media_dir) = fixture();
    std::env::remove_var("LOG_FILE");
    let config = WhassupConfig::load(Some(db_path), Some(media_dir)).expect("config");
    let repo = MessageRepository::open(&config.db_path).expect("repository");
    let probe = config.probe();

    let messages = repo.messages_for_chat(DIRECT, None).expect("messages");
    let lines: Vec<String> = messages
        .iter()
        .map(|m| message_line(m, &probe, false))
        .collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("4915773981234"));
    assert!(lines[0].ends_with("Hallo "));
    assert!(lines[1].contains("me"));
    assert!(lines[1].ends_with("[image/jpeg]"));
}

/// **Test: Without a media directory the photo is reported missing.**
///
/// **Setup:** Same fixture, no `--media-dir`.
/// **Action:** Render the outbound photo.
/// **Expected:** Line ends with `[media missing]`.
#[test]
#[serial]
fn test_render_history_without_media_dir() {
    let (_dir, db_path, _media_dir) = fixture();
    std::env::remove_var("WHASSUP_MEDIA_DIR");
    let config = WhassupConfig::load(Some(db_path), None).expect("config");
    let repo = MessageRepository::open(&config.db_path).expect("repository");

    let messages = repo.messages_for_chat(DIRECT, Some(1)).expect("messages");

    assert_eq!(messages.len(), 1);
    assert!(message_line(&messages[0], &config.probe(), false).ends_with("[media missing]"));
}
