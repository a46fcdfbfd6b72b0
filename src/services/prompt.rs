use anyhow::Context;
use std::io::{BufRead, Write};

/// Writes `label`, flushes, and reads one reply line. The label is skipped
/// when `echo` is false so machine-readable runs keep stdout pure JSON.
/// Empty replies are returned as-is; end of input is fatal.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    echo: bool,
) -> anyhow::Result<String> {
    if echo {
        write!(out, "{}", label)?;
        out.flush()?;
    }
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        anyhow::bail!("unexpected end of input at prompt {:?}", label.trim_end());
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    echo: bool,
) -> anyhow::Result<f64> {
    let raw = prompt_line(input, out, label, echo)?;
    raw.trim()
        .parse::<f64>()
        .with_context(|| format!("invalid number {:?}", raw))
}
