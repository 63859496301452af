//! Movie list/form flows wired to an explicit view.
//!
//! # Design
//! The view is a parameter, not global page state. Each flow performs one
//! request through the controller's transport and then makes exactly one
//! kind of view update: a message, an alert, a reload, or appended rows.

use tracing::warn;

use crate::client::MovieClient;
use crate::error::ApiError;
use crate::form::{serialize_form, FormInput};
use crate::outcome::{Outcome, MSG_DELETE_FAILED, MSG_LIST_FAILED};
use crate::table::{render_table, TableRow};
use crate::transport::Transport;

/// The UI surface the flows write to.
pub trait MovieView {
    /// Replace the response message area.
    fn show_message(&mut self, message: &str);
    /// Blocking alert.
    fn alert(&mut self, message: &str);
    /// Refresh the whole list view.
    fn reload(&mut self);
    fn append_row(&mut self, row: &TableRow);
}

pub struct MovieController<T, V> {
    client: MovieClient,
    transport: T,
    view: V,
}

impl<T: Transport, V: MovieView> MovieController<T, V> {
    pub fn new(client: MovieClient, transport: T, view: V) -> Self {
        Self {
            client,
            transport,
            view,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub async fn create_movie(&mut self, form: &FormInput) -> Outcome {
        let record = serialize_form(form);
        let outcome = self.client.create_movie(&self.transport, &record).await;
        self.view.show_message(outcome.message());
        outcome
    }

    pub async fn update_movie(&mut self, id: &str, form: &FormInput) -> Outcome {
        let record = serialize_form(form);
        let outcome = self.client.update_movie(&self.transport, id, &record).await;
        self.view.show_message(outcome.message());
        outcome
    }

    /// Success reloads the list; anything else raises an alert.
    pub async fn delete_movie(&mut self, id: &str) -> Outcome {
        let outcome = self.client.delete_movie(&self.transport, id).await;
        if outcome.is_success() {
            self.view.reload();
        } else {
            self.view.alert(MSG_DELETE_FAILED);
        }
        outcome
    }

    /// Append one row per listed record. Returns how many were appended.
    pub async fn load_movies(&mut self) -> Result<usize, ApiError> {
        let records = match self.client.list_all(&self.transport).await {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "listing movies failed");
                self.view.alert(MSG_LIST_FAILED);
                return Err(e);
            }
        };
        let rows = render_table(records);
        for row in &rows {
            self.view.append_row(row);
        }
        Ok(rows.len())
    }
}
