//! Generic state slice for the report pages.
//!
//! A fetch either fully replaces the rows or leaves them untouched: failed
//! validation and failed requests keep whatever was displayed before, with
//! the error recorded alongside.

#[derive(Debug)]
pub struct ReportSlice<F, R> {
    pub filters: F,
    pub rows: Vec<R>,
    pub loaded: bool,
    pub error: Option<String>,
}

impl<F: Default, R> Default for ReportSlice<F, R> {
    fn default() -> Self {
        ReportSlice {
            filters: F::default(),
            rows: Vec::new(),
            loaded: false,
            error: None,
        }
    }
}

impl<F: Default, R> ReportSlice<F, R> {
    pub fn view_resolved(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.loaded = true;
        self.error = None;
    }

    /// Record a failure without disturbing previously displayed rows.
    pub fn view_failed(&mut self, error: String) {
        self.error = Some(error);
    }

    /// Back to default filters, discarding fetched data and errors.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }
}
