use crate::domain::models::JsonOut;
use serde::Serialize;
use std::io::Write;

pub fn print_one<T: Serialize, W: Write>(
    out: &mut W,
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        )?;
    } else {
        writeln!(out, "{}", row(&data))?;
    }
    Ok(())
}
