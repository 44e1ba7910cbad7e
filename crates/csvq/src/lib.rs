//! csvq: query CSV files with sqlite3.
//!
//! csvq reads the header and first data row of each CSV file, infers a
//! table name and a typed column list, and generates the sqlite3 shell
//! script that creates the tables, bulk-loads the files with `.import`,
//! deletes the imported header rows and builds unique indexes on `id`
//! columns.
//!
//! Only the first data row is sampled for types, so a column whose first
//! value is atypical is typed from that value alone.
//!
//! # Example
//!
//! ```no_run
//! use csvq::{ScriptAssembler, Session, SessionMode};
//!
//! let script = ScriptAssembler::new()
//!     .assemble(["users.csv", "orders.csv"])
//!     .unwrap();
//!
//! let session = Session::new(&script, SessionMode::Query("select count(*) from users".into()));
//! println!("{}", session.render());
//! ```

pub mod ddl;
pub mod error;
pub mod inference;
pub mod input;
pub mod schema;
pub mod script;

pub use error::{CsvqError, Result};
pub use input::{MissingSamplePolicy, ReaderConfig, SchemaBuilder};
pub use schema::{ColumnSchema, ColumnType, TableSchema};
pub use script::{AssemblerConfig, LoadDirective, Script, ScriptAssembler, Session, SessionMode};
