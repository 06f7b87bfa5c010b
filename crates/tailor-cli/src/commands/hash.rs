//! Hash command implementation.

use tailor_core::compute_input_hash;
use tailor_schemas::CompileRequest;

use super::read_json_file;
use crate::output;

pub fn run(input: String) -> Result<(), Box<dyn std::error::Error>> {
    let value = read_json_file(&input)?;

    let request = match CompileRequest::parse(&value) {
        Ok(request) => request,
        Err(err) => {
            output::print_issue_table(&err);
            return Err(err.to_string().into());
        }
    };

    let digest = compute_input_hash(&request)?;
    println!("{}", digest);
    Ok(())
}
