//! Example: Generate the sqlite3 load script for CSV files.
//!
//! Usage:
//!   cargo run --example generate -- <file_path>...
//!
//! Example:
//!   cargo run --example generate -- users.csv orders.csv | sqlite3

use std::env;

use csvq::ddl::identifier;
use csvq::{ScriptAssembler, Session, SessionMode};

fn main() -> csvq::Result<()> {
    let files: Vec<String> = env::args().skip(1).collect();

    if files.is_empty() {
        eprintln!("Usage: cargo run --example generate -- <file_path>...");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example generate -- users.csv orders.csv | sqlite3");
        std::process::exit(1);
    }

    let script = ScriptAssembler::new().assemble(&files)?;

    for schema in script.schemas() {
        eprintln!("-- {}", schema.table());
        for col in schema.columns() {
            eprintln!("--   {:20} {:8} {}", col.name, col.column_type, col.original_name);
        }
    }

    let table = identifier(script.first_table().unwrap_or("sqlite_master"));
    let query = format!("select count(*) from {};", table);
    println!("{}", Session::new(&script, SessionMode::Query(query)).render());

    Ok(())
}
