//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise the startup contract outside the GUI: open the default store,
//!   report its contact count, abort with a diagnostic when it cannot open.

use contactbook_core::{
    core_version, default_log_level, init_logging, open_store, ContactRepository,
    SqliteContactRepository, DEFAULT_STORE_FILE,
};

fn main() {
    // Logging is best effort here; a probe without a log file is still a
    // valid probe.
    if let Ok(cwd) = std::env::current_dir() {
        let log_dir = cwd.join("logs");
        let _ = init_logging(default_log_level(), &log_dir.to_string_lossy());
    }

    if let Err(err) = run() {
        eprintln!("contactbook: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_store(DEFAULT_STORE_FILE)?;
    let repo = SqliteContactRepository::new(&conn);

    println!("contactbook_core version={}", core_version());
    println!("store={DEFAULT_STORE_FILE} contacts={}", repo.count()?);
    Ok(())
}
