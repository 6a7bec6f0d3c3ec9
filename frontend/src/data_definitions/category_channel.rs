//! Typed channel carrying category selections from the term tree to the
//! pages list.

use common::taxonomy::CategorySelection;
use tokio::sync::mpsc;
use tracing::warn;


pub fn category_channel() -> (CategorySender, CategoryReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (CategorySender(tx), CategoryReceiver(rx))
}

#[derive(Debug, Clone)]
pub struct CategorySender(mpsc::UnboundedSender<CategorySelection>);

impl CategorySender {
    /// Queue one selection. Returns false when the listener is gone; the
    /// selection is dropped, not retried.
    pub fn send(&self, selection: CategorySelection) -> bool {
        match self.0.send(selection) {
            Ok(()) => true,
            Err(e) => {
                warn!("Category selection {:?} dropped, no listener", e.0.category);
                false
            }
        }
    }
}

#[derive(Debug)]
pub struct CategoryReceiver(mpsc::UnboundedReceiver<CategorySelection>);

impl CategoryReceiver {
    pub async fn recv(&mut self) -> Option<CategorySelection> {
        self.0.recv().await
    }

    /// Next queued selection without waiting.
    pub fn try_recv(&mut self) -> Option<CategorySelection> {
        self.0.try_recv().ok()
    }
}
