//! Validate command implementation.

use tailor_schemas::CompileRequest;

use super::read_json_file;
use crate::output;

pub fn run(input: String, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let value = read_json_file(&input)?;

    match CompileRequest::parse(&value) {
        Ok(_) => {
            println!("OK: {} is a valid compile request", input);
            Ok(())
        }
        Err(err) => {
            if json {
                println!("{}", output::format_json(&serde_json::to_value(&err)?));
            } else {
                output::print_issue_table(&err);
            }
            Err(err.to_string().into())
        }
    }
}
