use std::sync::{Arc, Mutex};

use petshop_catalog::Catalog;

/// Shared application state. The catalog is behind a single exclusive lock;
/// handlers never hold it across an await point.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Mutex<Catalog>>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(catalog)),
        }
    }
}
