use serde::Serialize;

/// The eight primary columns of a change-management export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Column {
    Customer,
    Change,
    Ctask,
    Description,
    Summary,
    StartDate,
    EndDate,
    Status,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::Customer,
        Column::Change,
        Column::Ctask,
        Column::Description,
        Column::Summary,
        Column::StartDate,
        Column::EndDate,
        Column::Status,
    ];

    /// Header text as it appears in a well-formed export.
    pub fn header(&self) -> &'static str {
        match self {
            Column::Customer => "Customer",
            Column::Change => "Change",
            Column::Ctask => "Ctask",
            Column::Description => "Description",
            Column::Summary => "Summary",
            Column::StartDate => "Start Date",
            Column::EndDate => "End Date",
            Column::Status => "Status",
        }
    }

    /// Match a header cell against the canonical names.
    ///
    /// Case, surrounding whitespace, inner spaces, `_` and `-` are ignored, so
    /// `StartDate`, `start_date` and ` Start Date ` all resolve to [`Column::StartDate`].
    pub fn from_header(raw: &str) -> Option<Self> {
        let key = header_key(raw);
        Column::ALL
            .into_iter()
            .find(|c| header_key(c.header()) == key)
    }
}

fn header_key(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}
