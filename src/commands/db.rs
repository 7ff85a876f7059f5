use std::{
    error::Error,
    process::{self, Command},
};

use crate::config::{Config, DatabaseConfig};

pub fn handle_db_console_command(config: &Config) {
    println!("🗄️  Opening database with sqlite3...");

    if let Err(e) = handle_db_command(&config.database) {
        eprintln!("❌ Failed to open database: {e}");
        process::exit(1);
    }
}

pub fn handle_db_command(db_config: &DatabaseConfig) -> Result<(), Box<dyn Error>> {
    let path = db_config
        .sqlite_path()
        .ok_or("The configured database is not a SQLite file")?;

    println!("🔗 Launching sqlite3 on {path}...");
    println!("   (Use .quit to quit, .help for help, .tables to list tables)");
    println!();

    let status = Command::new("sqlite3").arg(path).status()?;

    if !status.success() {
        return Err(format!("sqlite3 exited with code: {:?}", status.code()).into());
    }

    Ok(())
}
