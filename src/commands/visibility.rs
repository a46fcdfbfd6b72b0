use crate::*;
use std::io::{BufRead, Write};

pub fn handle_visibility<R: BufRead, W: Write>(
    json: bool,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let board = collect_messages(input, out, !json)?;
    let viewer = NestedViewer::new(&board);
    let report = VisibilityReport {
        nested: viewer.rows(),
        outer: outer_rows(&board),
    };
    print_one(out, json, report, render_views)
}

fn render_views(report: &VisibilityReport) -> String {
    let mut lines = vec![String::new(), "--- nested view ---".to_string()];
    for row in &report.nested {
        lines.push(format!("{}: {}", row.tier.label(), row.text));
    }
    lines.push(String::new());
    lines.push("--- outer view ---".to_string());
    for row in &report.outer {
        lines.push(format!("{}: {}", row.tier.label(), row.text));
    }
    lines.join("\n")
}
