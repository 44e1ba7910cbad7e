//! Query command - print a script that loads the files and runs a query.

use csvq::{ScriptAssembler, Session, SessionMode};

use crate::cli::InputArgs;

pub fn run(query: String, input: InputArgs) -> Result<(), Box<dyn std::error::Error>> {
    let script = ScriptAssembler::with_config(input.config()).assemble(&input.files)?;
    let session = Session::new(&script, SessionMode::Query(query));

    // Meant to be piped: `csvq query -q "..." data.csv | sqlite3`
    println!("{}", session.render());

    Ok(())
}
