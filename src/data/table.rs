//! Brand Table Module
//! Typed, ordered view of the loaded data plus the brand lookup.

/// One row of brand metrics. Metric fields are `None` when the source value
/// was absent or failed numeric coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandRecord {
    pub brand: String,
    pub mentions: Option<f64>,
    pub sov_percent: Option<f64>,
    pub avg_sentiment: Option<f64>,
}

impl BrandRecord {
    /// Multi-line summary in the fixed report format (two decimals,
    /// `%` suffix on share of voice, `n/a` for missing metrics).
    pub fn summary(&self) -> String {
        format!(
            "Brand: {}\nShare of Voice: {}\nAverage Sentiment: {}",
            self.brand,
            format_percent(self.sov_percent),
            format_metric(self.avg_sentiment),
        )
    }
}

/// Ordered collection of brand records, row order = source order.
/// Immutable after loading.
#[derive(Debug, Clone)]
pub struct BrandTable {
    records: Vec<BrandRecord>,
    sov_derived: bool,
}

impl BrandTable {
    pub fn new(records: Vec<BrandRecord>, sov_derived: bool) -> Self {
        Self {
            records,
            sov_derived,
        }
    }

    pub fn records(&self) -> &[BrandRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether `sov_percent` was derived from mention counts rather than
    /// read from the source.
    pub fn sov_derived(&self) -> bool {
        self.sov_derived
    }

    /// Case-insensitive exact match on the brand name. When several rows
    /// share a name the first one in row order wins.
    pub fn find(&self, name: &str) -> Option<&BrandRecord> {
        let needle = name.to_lowercase();
        self.records
            .iter()
            .find(|record| record.brand.to_lowercase() == needle)
    }

    /// Formatted summary for a brand, or the not-found message with the
    /// queried name echoed back as given.
    pub fn lookup(&self, name: &str) -> String {
        match self.find(name) {
            Some(record) => record.summary(),
            None => format!("No data found for brand '{name}'."),
        }
    }
}

fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "n/a".to_string(),
    }
}

fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}%"),
        None => "n/a".to_string(),
    }
}
