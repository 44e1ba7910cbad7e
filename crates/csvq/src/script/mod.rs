//! Script assembly across input files and sqlite3 session rendering.

mod assembler;
mod output;
mod session;

pub use assembler::{AssemblerConfig, ScriptAssembler};
pub use output::{LoadDirective, Script};
pub use session::{Session, SessionMode};
