//! Full sqlite3 shell sessions around an assembled script.

use super::output::Script;
use crate::ddl::identifier;

/// How the sqlite3 shell will be driven.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMode {
    /// Run a query and print CSV to stdout.
    Query(String),
    /// Set up the tables only, printing to stdout.
    Init,
    /// Set up the tables and leave an interactive prompt in column mode.
    Interactive,
}

/// Text handed to the sqlite3 shell.
pub struct Session<'a> {
    script: &'a Script,
    mode: SessionMode,
}

impl<'a> Session<'a> {
    pub fn new(script: &'a Script, mode: SessionMode) -> Self {
        Self { script, mode }
    }

    /// Preamble, setup script, output mode and query.
    pub fn render(&self) -> String {
        let (output, query) = match &self.mode {
            SessionMode::Query(sql) => (".output stdout", terminate(sql)),
            SessionMode::Init => (".output stdout", String::new()),
            SessionMode::Interactive => (".mode columns", String::new()),
        };

        format!(
            ".headers on\n.mode csv\n{}\n{}\n{}",
            self.script.full_script(),
            output,
            query
        )
        .trim()
        .to_string()
    }

    /// Table overview and a reminder of how to save results.
    pub fn banner(&self) -> String {
        let table = identifier(self.script.first_table().unwrap_or("<table>"));
        format!(
            "{}\n\nTo save results:\n\n.mode csv\n.output out.csv\nselect * from {};",
            self.script.create_tables_only(),
            table
        )
    }
}

fn terminate(sql: &str) -> String {
    let sql = sql.trim_end();
    if sql.is_empty() || sql.ends_with(';') {
        sql.to_string()
    } else {
        format!("{};", sql)
    }
}
