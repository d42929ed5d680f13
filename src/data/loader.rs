//! Data Loader Module
//! Loads the share-of-voice CSV with Polars, derives and validates the
//! schema, and extracts the typed brand table.

use polars::prelude::*;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

use crate::data::table::{BrandRecord, BrandTable};

/// Data file probed when no path is given on the command line.
pub const DEFAULT_DATA_FILE: &str = "atomberg_sov_results.csv";

pub const COL_BRAND: &str = "brand";
pub const COL_MENTIONS: &str = "mentions";
pub const COL_SOV: &str = "sov_percent";
pub const COL_SENTIMENT: &str = "avg_sentiment";

/// Columns that must exist once the derivation pass has run.
const REQUIRED_COLUMNS: [&str; 3] = [COL_BRAND, COL_SOV, COL_SENTIMENT];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Missing columns in data: {0:?}")]
    MissingColumns(Vec<String>),
}

/// Loads the brand metrics table from a CSV file, falling back to the
/// built-in sample data when the file does not exist.
pub struct DataLoader {
    path: PathBuf,
}

impl DataLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the table: read the file (or fall back), derive `sov_percent`
    /// from mention counts when the source lacks it, validate the required
    /// columns, coerce the metric columns to numeric, and extract the
    /// ordered records.
    pub fn load(&self) -> Result<BrandTable, LoaderError> {
        let mut df = if self.path.exists() {
            let df = self.read_csv()?;
            info!("loaded data from {}", self.path.display());
            df
        } else {
            info!(
                "data file {} not found; using built-in sample data",
                self.path.display()
            );
            Self::sample_frame()?
        };

        let mut sov_derived = false;
        if df.column(COL_SOV).is_err() && df.column(COL_MENTIONS).is_ok() {
            df = Self::derive_sov(df)?;
            sov_derived = true;
            info!("derived {COL_SOV} from {COL_MENTIONS}");
        }

        Self::validate(&df)?;

        df = Self::coerce_numeric(df, COL_SOV)?;
        df = Self::coerce_numeric(df, COL_SENTIMENT)?;

        let table = Self::extract(&df, sov_derived)?;
        if table.is_empty() {
            warn!("data source contains no usable rows");
        }
        Ok(table)
    }

    /// Read the CSV file using Polars lazy scanning.
    fn read_csv(&self) -> PolarsResult<DataFrame> {
        LazyCsvReader::new(&self.path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()
    }

    /// Fixed 5-brand sample used when no data file is present.
    fn sample_frame() -> PolarsResult<DataFrame> {
        DataFrame::new(vec![
            Column::new(
                COL_BRAND.into(),
                vec!["Atomberg", "Havells", "Crompton", "Orient", "Usha"],
            ),
            Column::new(COL_MENTIONS.into(), vec![45i64, 30, 20, 15, 10]),
            Column::new(COL_SENTIMENT.into(), vec![0.35, 0.10, -0.20, 0.05, -0.10]),
        ])
    }

    /// Append `sov_percent` as each row's share of the mention total.
    /// Rows without a parsable mention count, or a non-positive total,
    /// yield null.
    fn derive_sov(mut df: DataFrame) -> PolarsResult<DataFrame> {
        let mentions = df.column(COL_MENTIONS)?.cast(&DataType::Float64)?;
        let mentions_ca = mentions.f64()?;
        let total: f64 = mentions_ca.into_iter().flatten().sum();

        let sov: Vec<Option<f64>> = mentions_ca
            .into_iter()
            .map(|count| match count {
                Some(v) if total > 0.0 => Some(v / total * 100.0),
                _ => None,
            })
            .collect();

        df.with_column(Column::new(COL_SOV.into(), sov))?;
        Ok(df)
    }

    /// Check that every required column exists, naming all missing ones.
    fn validate(df: &DataFrame) -> Result<(), LoaderError> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| df.column(name).is_err())
            .map(|name| name.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(LoaderError::MissingColumns(missing))
        }
    }

    /// Cast a column to Float64. Cells that cannot be parsed become null
    /// rather than failing the load.
    fn coerce_numeric(mut df: DataFrame, name: &str) -> PolarsResult<DataFrame> {
        let before = df.column(name)?.null_count();
        let casted = df.column(name)?.cast(&DataType::Float64)?;
        let after = casted.null_count();
        if after > before {
            warn!(
                "{} value(s) in '{}' could not be parsed as numeric",
                after - before,
                name
            );
        }
        df.with_column(casted)?;
        Ok(df)
    }

    /// Turn the validated frame into ordered records. Rows with a null
    /// brand cell are skipped; null or NaN metrics become `None`.
    fn extract(df: &DataFrame, sov_derived: bool) -> Result<BrandTable, LoaderError> {
        let brand_col = df.column(COL_BRAND)?;
        let sov_ca = df.column(COL_SOV)?.f64()?;
        let sentiment_ca = df.column(COL_SENTIMENT)?.f64()?;

        let mentions_col = match df.column(COL_MENTIONS) {
            Ok(col) => Some(col.cast(&DataType::Float64)?),
            Err(_) => None,
        };
        let mentions_ca = match mentions_col.as_ref() {
            Some(col) => Some(col.f64()?),
            None => None,
        };

        let mut records = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let value = brand_col.get(i)?;
            if value.is_null() {
                warn!("skipping row {i}: empty brand name");
                continue;
            }
            let brand = value.to_string().trim_matches('"').to_string();

            records.push(BrandRecord {
                brand,
                mentions: mentions_ca
                    .and_then(|ca| ca.get(i))
                    .filter(|v| !v.is_nan()),
                sov_percent: sov_ca.get(i).filter(|v| !v.is_nan()),
                avg_sentiment: sentiment_ca.get(i).filter(|v| !v.is_nan()),
            });
        }

        Ok(BrandTable::new(records, sov_derived))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    fn load_csv(contents: &str) -> Result<BrandTable, LoaderError> {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("metrics.csv");
        fs::write(&path, contents).expect("write fixture");
        DataLoader::new(&path).load()
    }

    #[test]
    fn missing_file_falls_back_to_sample_data() -> Result<()> {
        let dir = tempdir()?;
        let table = DataLoader::new(dir.path().join("absent.csv")).load()?;

        assert_eq!(table.len(), 5);
        assert!(table.sov_derived());

        let brands: Vec<&str> = table.records().iter().map(|r| r.brand.as_str()).collect();
        assert_eq!(brands, ["Atomberg", "Havells", "Crompton", "Orient", "Usha"]);

        // 45 of 120 total mentions
        let atomberg = &table.records()[0];
        assert_eq!(atomberg.sov_percent, Some(37.5));
        assert_eq!(atomberg.avg_sentiment, Some(0.35));
        Ok(())
    }

    #[test]
    fn sample_lookup_uses_derived_share() -> Result<()> {
        let dir = tempdir()?;
        let table = DataLoader::new(dir.path().join("absent.csv")).load()?;
        assert_eq!(
            table.lookup("ATOMBERG"),
            "Brand: Atomberg\nShare of Voice: 37.50%\nAverage Sentiment: 0.35"
        );
        Ok(())
    }

    #[test]
    fn explicit_columns_round_trip_exactly() -> Result<()> {
        let table = load_csv(
            "brand,sov_percent,avg_sentiment\n\
             Alpha,45.5,0.35\n\
             Beta,54.5,-0.125\n",
        )?;

        assert_eq!(table.len(), 2);
        assert!(!table.sov_derived());
        assert_eq!(table.records()[0].sov_percent, Some(45.5));
        assert_eq!(table.records()[0].avg_sentiment, Some(0.35));
        assert_eq!(table.records()[1].sov_percent, Some(54.5));
        assert_eq!(table.records()[1].avg_sentiment, Some(-0.125));
        Ok(())
    }

    #[test]
    fn derives_share_from_mentions() -> Result<()> {
        let table = load_csv(
            "brand,mentions,avg_sentiment\n\
             Alpha,45,0.35\n\
             Beta,30,0.10\n\
             Gamma,20,-0.20\n\
             Delta,15,0.05\n\
             Epsilon,10,-0.10\n",
        )?;

        assert!(table.sov_derived());
        let total: f64 = table.records().iter().filter_map(|r| r.sov_percent).sum();
        assert!(
            (total - 100.0).abs() < 1e-9,
            "derived shares sum to {total}, expected 100"
        );
        assert_eq!(table.records()[0].sov_percent, Some(37.5));
        Ok(())
    }

    #[test]
    fn explicit_share_wins_over_mentions() -> Result<()> {
        let table = load_csv(
            "brand,mentions,sov_percent,avg_sentiment\n\
             Alpha,45,60.0,0.35\n\
             Beta,30,40.0,0.10\n",
        )?;

        assert!(!table.sov_derived());
        assert_eq!(table.records()[0].sov_percent, Some(60.0));
        Ok(())
    }

    #[test]
    fn missing_sentiment_column_is_fatal() {
        let result = load_csv("brand,mentions\nAlpha,45\nBeta,30\n");
        match result {
            Err(LoaderError::MissingColumns(missing)) => {
                assert_eq!(missing, vec!["avg_sentiment".to_string()]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn underivable_share_is_reported_missing() {
        // No sov_percent and no mentions: derivation is skipped and
        // validation names the absent column.
        let result = load_csv("brand,avg_sentiment\nAlpha,0.35\n");
        match result {
            Err(LoaderError::MissingColumns(missing)) => {
                assert_eq!(missing, vec!["sov_percent".to_string()]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn unparsable_metrics_become_missing() -> Result<()> {
        let table = load_csv(
            "brand,sov_percent,avg_sentiment\n\
             Alpha,37.5,not_a_number\n\
             Beta,oops,0.10\n",
        )?;

        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].sov_percent, Some(37.5));
        assert_eq!(table.records()[0].avg_sentiment, None);
        assert_eq!(table.records()[1].sov_percent, None);
        assert_eq!(table.records()[1].avg_sentiment, Some(0.10));
        Ok(())
    }

    #[test]
    fn rows_without_brand_are_skipped() -> Result<()> {
        let table = load_csv(
            "brand,sov_percent,avg_sentiment\n\
             Alpha,60.0,0.35\n\
             ,30.0,0.10\n\
             Beta,10.0,-0.20\n",
        )?;

        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].brand, "Alpha");
        assert_eq!(table.records()[1].brand, "Beta");
        Ok(())
    }

    #[test]
    fn zero_mention_total_derives_missing_shares() -> Result<()> {
        let table = load_csv(
            "brand,mentions,avg_sentiment\n\
             Alpha,0,0.35\n\
             Beta,0,0.10\n",
        )?;

        assert!(table.sov_derived());
        assert!(table.records().iter().all(|r| r.sov_percent.is_none()));
        Ok(())
    }
}
