use pdsect_core::error::PdsectError;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    query: &str,
    limit: usize,
    title: Option<String>,
    output_format: &str,
) -> Result<(), PdsectError> {
    let result = super::parse_file(&input_file, title)?;
    let hits = pdsect_core::search(&result.sections, query, limit);

    match output_format {
        "json" => output::json::print(&hits)?,
        _ => println!("{}", output::table::format_hits(query, &hits)),
    }

    Ok(())
}
