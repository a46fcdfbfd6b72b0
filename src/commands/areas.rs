use crate::*;
use std::io::{BufRead, Write};

pub fn handle_areas<R: BufRead, W: Write>(
    json: bool,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let calc = AreaCalculator;

    let length = prompt_number(input, out, "enter rectangle length: ", !json)?;
    let width = prompt_number(input, out, "enter rectangle width: ", !json)?;
    let rectangle = RectangleReport {
        length,
        width,
        area: calc.rectangle_area(length, width),
    };
    if !json {
        writeln!(out, "rectangle area: {}", rectangle.area)?;
        writeln!(out)?;
    }

    let base = prompt_number(input, out, "enter triangle base: ", !json)?;
    let height = prompt_number(input, out, "enter triangle height: ", !json)?;
    let triangle = TriangleReport {
        base,
        height,
        area: calc.triangle_area(base, height),
    };
    if json {
        let report = AreasReport {
            rectangle,
            triangle,
        };
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: report
            })?
        )?;
    } else {
        writeln!(out, "triangle area: {}", triangle.area)?;
    }
    Ok(())
}
