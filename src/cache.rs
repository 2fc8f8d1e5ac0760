use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::invoice::InvoiceSummary;

/// Route every invoice action revalidates and redirects to.
pub const INVOICES_PATH: &str = "/dashboard/invoices";

/// Result of a cache lookup. A miss carries the generation the path was at,
/// which must be handed back to `store`.
pub enum Lookup {
    Hit(Arc<Vec<InvoiceSummary>>),
    Miss(u64),
}

#[derive(Default)]
struct Views {
    entries: HashMap<String, Arc<Vec<InvoiceSummary>>>,
    generations: HashMap<String, u64>,
}

impl Views {
    fn generation(&self, path: &str) -> u64 {
        self.generations.get(path).copied().unwrap_or(0)
    }
}

/// In-process cache of list views, keyed by the route path that renders them.
///
/// Entries live until `revalidate` is called for their path. Each revalidation
/// bumps the path's generation; a rebuild started before the bump is discarded
/// by `store`, so a list read before a write can never outlive that write.
#[derive(Clone, Default)]
pub struct ViewCache {
    views: Arc<Mutex<Views>>,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Lookup {
        let views = self.views.lock().unwrap_or_else(|e| e.into_inner());
        match views.entries.get(path) {
            Some(rows) => Lookup::Hit(Arc::clone(rows)),
            None => Lookup::Miss(views.generation(path)),
        }
    }

    /// Cache `rows` if `path` has not been revalidated since `generation`
    /// was observed. The rows are returned either way for rendering.
    pub fn store(
        &self,
        path: &str,
        generation: u64,
        rows: Vec<InvoiceSummary>,
    ) -> Arc<Vec<InvoiceSummary>> {
        let rows = Arc::new(rows);
        let mut views = self.views.lock().unwrap_or_else(|e| e.into_inner());
        if views.generation(path) == generation {
            views.entries.insert(path.to_string(), Arc::clone(&rows));
        } else {
            log::debug!("Discarding stale rebuild of {path}");
        }
        rows
    }

    /// Drop the cached view for `path`. Returns whether anything was cached.
    pub fn revalidate(&self, path: &str) -> bool {
        let mut views = self.views.lock().unwrap_or_else(|e| e.into_inner());
        *views.generations.entry(path.to_string()).or_insert(0) += 1;
        let dropped = views.entries.remove(path).is_some();
        log::debug!("revalidate {path} (cached: {dropped})");
        dropped
    }

    pub fn is_cached(&self, path: &str) -> bool {
        let views = self.views.lock().unwrap_or_else(|e| e.into_inner());
        views.entries.contains_key(path)
    }
}
