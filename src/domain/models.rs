use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Visibility tier of a board message. `Owner` is readable only through the
/// nested viewer; the other three are shared with outer callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Owner,
    Unit,
    Derived,
    Public,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Owner => "owner",
            Tier::Unit => "unit",
            Tier::Derived => "derived",
            Tier::Public => "public",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageRow {
    pub tier: Tier,
    pub text: String,
}

/// Four messages with differentiated visibility. The owner message is a
/// private field: outside this module only the three shared tiers exist.
#[derive(Debug)]
pub struct MessageBoard {
    owner: String,
    pub unit: String,
    pub derived: String,
    pub public: String,
}

impl MessageBoard {
    pub fn new(owner: String, unit: String, derived: String, public: String) -> Self {
        Self {
            owner,
            unit,
            derived,
            public,
        }
    }
}

/// Nested view over a board. Takes an explicit reference to the enclosing
/// record; defined alongside `MessageBoard` so the owner tier is in reach.
pub struct NestedViewer<'a> {
    board: &'a MessageBoard,
}

impl<'a> NestedViewer<'a> {
    pub fn new(board: &'a MessageBoard) -> Self {
        Self { board }
    }

    /// All four messages in tier order, owner first.
    pub fn rows(&self) -> Vec<MessageRow> {
        vec![
            MessageRow {
                tier: Tier::Owner,
                text: self.board.owner.clone(),
            },
            MessageRow {
                tier: Tier::Unit,
                text: self.board.unit.clone(),
            },
            MessageRow {
                tier: Tier::Derived,
                text: self.board.derived.clone(),
            },
            MessageRow {
                tier: Tier::Public,
                text: self.board.public.clone(),
            },
        ]
    }
}

#[derive(Serialize)]
pub struct VisibilityReport {
    pub nested: Vec<MessageRow>,
    pub outer: Vec<MessageRow>,
}

#[derive(Serialize)]
pub struct RectangleReport {
    pub length: f64,
    pub width: f64,
    pub area: f64,
}

#[derive(Serialize)]
pub struct TriangleReport {
    pub base: f64,
    pub height: f64,
    pub area: f64,
}

#[derive(Serialize)]
pub struct AreasReport {
    pub rectangle: RectangleReport,
    pub triangle: TriangleReport,
}
