//! Schema command - show inferred tables and column types.

use colored::Colorize;
use csvq::{ColumnType, ScriptAssembler};

use crate::cli::InputArgs;

pub fn run(input: InputArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let script = ScriptAssembler::with_config(input.config()).assemble(&input.files)?;

    if json {
        println!("{}", script.schemas_json()?);
        return Ok(());
    }

    for (schema, load) in script.schemas().iter().zip(script.loads()) {
        println!(
            "{} {}",
            schema.table().cyan().bold(),
            format!("({})", load.path.display()).dimmed()
        );

        for col in schema.columns() {
            let ty = match col.column_type {
                ColumnType::Integer => col.column_type.sql_keyword().blue(),
                ColumnType::Real => col.column_type.sql_keyword().magenta(),
                ColumnType::Text => col.column_type.sql_keyword().normal(),
            };
            let key = if col.is_identifier() && !input.no_index {
                "unique".yellow().to_string()
            } else {
                String::new()
            };

            println!(
                "  {:24} {:8} {:8} {}",
                col.name,
                ty,
                key,
                col.original_name.dimmed()
            );
        }
        println!();
    }

    println!(
        "{} tables, {} columns",
        script.schemas().len().to_string().white().bold(),
        script
            .schemas()
            .iter()
            .map(|s| s.column_count())
            .sum::<usize>()
            .to_string()
            .white()
            .bold()
    );

    Ok(())
}
