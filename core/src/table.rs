//! Table rows for the movie list.
//!
//! Each row shows every field except `synopsis`, `slug` and `id`, followed
//! by a delete control and an update control.

use maud::{html, Markup};

use crate::types::MovieRecord;

/// Column headers in display order.
pub const COLUMNS: [&str; 7] = [
    "name",
    "releaseDate",
    "rating",
    "director",
    "mainActor",
    "duration",
    "genre",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    /// Delete the record with this id. Only present when the record has one.
    Delete { id: String },
    /// Open the update form pre-filled with this record.
    Update { record: MovieRecord },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub actions: Vec<RowAction>,
}

impl TableRow {
    pub fn from_record(record: &MovieRecord) -> Self {
        let number = |n: Option<i64>| n.map(|v| v.to_string()).unwrap_or_default();
        let cells = vec![
            record.name.clone(),
            record.release_date.clone(),
            number(record.rating),
            record.director.clone(),
            record.main_actor.clone(),
            number(record.duration),
            record.genre.join(","),
        ];

        let mut actions = Vec::with_capacity(2);
        if let Some(id) = &record.id {
            actions.push(RowAction::Delete { id: id.clone() });
        }
        actions.push(RowAction::Update {
            record: record.clone(),
        });

        Self { cells, actions }
    }

    pub fn markup(&self) -> Markup {
        html! {
            tr {
                @for cell in &self.cells {
                    td { (cell) }
                }
                @for action in &self.actions {
                    td {
                        @match action {
                            RowAction::Delete { id } => {
                                button type="button" data-action="delete" data-id=(id) { "Borrar" }
                            }
                            RowAction::Update { record } => {
                                button type="button" data-action="update" data-id=[record.id.as_deref()] { "Actualizar" }
                            }
                        }
                    }
                }
            }
        }
    }

    pub fn to_html(&self) -> String {
        self.markup().into_string()
    }
}

/// One row per record, consuming the sequence once.
pub fn render_table(records: impl IntoIterator<Item = MovieRecord>) -> Vec<TableRow> {
    records.into_iter().map(|r| TableRow::from_record(&r)).collect()
}
