use pdsect_core::error::PdsectError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), PdsectError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
