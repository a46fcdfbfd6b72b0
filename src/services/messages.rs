use crate::domain::models::{MessageBoard, MessageRow, Tier};
use crate::services::prompt::prompt_line;
use std::io::{BufRead, Write};

/// Prompts for the four tiers in order (owner, unit, derived, public).
/// No validation: empty replies populate the board unchanged.
pub fn collect_messages<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    echo: bool,
) -> anyhow::Result<MessageBoard> {
    let owner = prompt_line(input, out, "enter owner-only message: ", echo)?;
    let unit = prompt_line(input, out, "enter unit-shared message: ", echo)?;
    let derived = prompt_line(input, out, "enter derived-shared message: ", echo)?;
    let public = prompt_line(input, out, "enter public message: ", echo)?;
    Ok(MessageBoard::new(owner, unit, derived, public))
}

/// Shared tiers as seen from outside the board's module. The owner field is
/// private to `domain::models`, so this projection cannot include it.
pub fn outer_rows(board: &MessageBoard) -> Vec<MessageRow> {
    vec![
        MessageRow {
            tier: Tier::Unit,
            text: board.unit.clone(),
        },
        MessageRow {
            tier: Tier::Derived,
            text: board.derived.clone(),
        },
        MessageRow {
            tier: Tier::Public,
            text: board.public.clone(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::{collect_messages, outer_rows};
    use crate::domain::models::{NestedViewer, Tier};
    use std::io::Cursor;

    #[test]
    fn collects_four_tiers_in_order() {
        let mut input = Cursor::new(&b"a\nb\nc\nd\n"[..]);
        let mut out = Vec::new();
        let board = collect_messages(&mut input, &mut out, true).unwrap();

        let rows = NestedViewer::new(&board).rows();
        let texts: Vec<&str> = rows.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, ["a", "b", "c", "d"]);

        let prompts = String::from_utf8(out).unwrap();
        let owner_at = prompts.find("owner-only").unwrap();
        let public_at = prompts.find("public message").unwrap();
        assert!(owner_at < public_at);
    }

    #[test]
    fn collection_fails_when_input_runs_dry() {
        let mut input = Cursor::new(&b"a\nb\n"[..]);
        let mut out = Vec::new();
        let err = collect_messages(&mut input, &mut out, true).unwrap_err();
        assert!(err.to_string().contains("end of input"));
    }

    #[test]
    fn outer_rows_skip_the_owner_tier() {
        let mut input = Cursor::new(&b"a\nb\nc\nd\n"[..]);
        let mut out = Vec::new();
        let board = collect_messages(&mut input, &mut out, false).unwrap();

        let rows = outer_rows(&board);
        let tiers: Vec<Tier> = rows.iter().map(|r| r.tier).collect();
        assert_eq!(tiers, [Tier::Unit, Tier::Derived, Tier::Public]);
        let texts: Vec<&str> = rows.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, ["b", "c", "d"]);
    }
}
