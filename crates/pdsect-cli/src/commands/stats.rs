use pdsect_core::error::PdsectError;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    title: Option<String>,
    output_format: &str,
) -> Result<(), PdsectError> {
    let result = super::parse_file(&input_file, title)?;
    let stats = pdsect_core::stats(&result.toc, &result.sections);

    match output_format {
        "json" => output::json::print(&stats)?,
        _ => println!("{}", output::table::format_stats(&result.doc_title, &stats)),
    }

    Ok(())
}
