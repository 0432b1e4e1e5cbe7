//! Car Price Dashboard Application
//! Ties loading, brand filtering and aggregation together per brand selection.

use crate::charts::BarChart;
use crate::data::{
    export_brand, CarRecord, DataProcessor, Dataset, DatasetCache, ExportError, LoaderError,
};
use crate::settings::DashboardSettings;
use crate::stats::{GroupKey, StatsCalculator, ValueField};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Loader(#[from] LoaderError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Everything the dashboard shows for one selected brand.
#[derive(Debug, Clone, Serialize)]
pub struct BrandView {
    pub brand: String,
    pub records: Vec<CarRecord>,
    pub charts: Vec<BarChart>,
}

/// Main dashboard state: settings plus the session's dataset cache.
pub struct DashboardApp {
    settings: DashboardSettings,
    cache: DatasetCache,
}

impl DashboardApp {
    pub fn new(settings: DashboardSettings) -> Self {
        let cache = DatasetCache::new(settings.csv_path.clone(), settings.policy);
        Self { settings, cache }
    }

    pub fn cache(&self) -> &DatasetCache {
        &self.cache
    }

    pub fn dataset(&mut self) -> Result<Arc<Dataset>, AppError> {
        Ok(self.cache.get()?)
    }

    /// Selector choices: distinct makes, ascending.
    pub fn brands(&mut self) -> Result<Vec<String>, AppError> {
        let dataset = self.dataset()?;
        Ok(DataProcessor::brands(&dataset.records))
    }

    /// Build the table and charts for `brand`. An unknown brand gives an empty
    /// table and an empty brand chart, not an error.
    pub fn select_brand(&mut self, brand: &str) -> Result<BrandView, AppError> {
        let dataset = self.dataset()?;
        let records: Vec<CarRecord> = DataProcessor::filter_by_brand(&dataset.records, brand)
            .into_iter()
            .cloned()
            .collect();
        debug!(brand, rows = records.len(), "brand selected");

        let charts = Self::build_charts(&dataset.records, brand, self.settings.brand_chart);
        Ok(BrandView {
            brand: brand.to_string(),
            records,
            charts,
        })
    }

    /// Write `<brand>_cars.csv` into the configured export directory.
    pub fn export_brand(&mut self, brand: &str) -> Result<PathBuf, AppError> {
        let dataset = self.dataset()?;
        Ok(export_brand(&dataset, brand, &self.settings.export_dir)?)
    }

    /// Forget the cached dataset so the next call reads the file again.
    pub fn reload(&mut self) {
        info!("reloading dataset on next access");
        self.cache.reset();
    }

    fn build_charts(records: &[CarRecord], brand: &str, brand_chart: bool) -> Vec<BarChart> {
        let by_category =
            StatsCalculator::group_average(records, GroupKey::Category, ValueField::Invoice);
        let by_drive_train =
            StatsCalculator::group_average(records, GroupKey::DriveTrain, ValueField::Msrp);

        let mut charts = vec![
            BarChart::from_averages(
                "Average Invoice by Price Category",
                GroupKey::Category,
                ValueField::Invoice,
                &by_category,
            ),
            BarChart::from_averages(
                "Average MSRP by Drive Train",
                GroupKey::DriveTrain,
                ValueField::Msrp,
                &by_drive_train,
            ),
        ];

        if brand_chart {
            let scoped = StatsCalculator::group_average_where(
                records,
                GroupKey::Category,
                ValueField::Invoice,
                |r| r.make == brand,
            );
            charts.push(BarChart::from_averages(
                format!("Average Invoice by Price Category for {}", brand),
                GroupKey::Category,
                ValueField::Invoice,
                &scoped,
            ));
        }

        charts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PriceCategory;
    use std::fs;

    const SOURCE: &str = "Make,Model,Type,Origin,DriveTrain,MSRP,Invoice\n\
        Audi,A8 L Quattro 4dr,Sedan,Europe,All,\"$69,190\",\"$64,740\"\n\
        Acura,MDX,SUV,Asia,All,\"$36,945\",\"$33,337\"\n\
        Acura,RSX Type S 2dr,Sedan,Asia,Front,\"$23,820\",\"$21,761\"\n\
        BMW,325i 4dr,Sedan,Europe,Rear,\"$28,495\",\"$26,155\"\n";

    fn app(dir: &tempfile::TempDir, brand_chart: bool) -> DashboardApp {
        let csv_path = dir.path().join("CARS.csv");
        fs::write(&csv_path, SOURCE).unwrap();
        DashboardApp::new(DashboardSettings {
            csv_path,
            brand_chart,
            export_dir: dir.path().join("exports"),
            ..Default::default()
        })
    }

    #[test]
    fn test_brands_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir, true);
        assert_eq!(app.brands().unwrap(), vec!["Acura", "Audi", "BMW"]);
    }

    #[test]
    fn test_select_brand_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir, true);

        let view = app.select_brand("Acura").unwrap();
        assert_eq!(view.brand, "Acura");
        assert_eq!(
            view.records,
            vec![
                CarRecord::new("Acura", "MDX", "All", 36_945, 33_337),
                CarRecord::new("Acura", "RSX Type S 2dr", "Front", 23_820, 21_761),
            ]
        );
        assert!(view
            .records
            .iter()
            .all(|r| r.category == PriceCategory::MidBudget));

        assert_eq!(view.charts.len(), 3);
        let scoped = &view.charts[2];
        assert_eq!(scoped.title, "Average Invoice by Price Category for Acura");
        assert_eq!(scoped.bars.len(), 1);
        assert_eq!(scoped.bars[0].label, "Mid Budget");
        assert_eq!(scoped.bars[0].value, 27_549.0);
    }

    #[test]
    fn test_global_charts_cover_all_brands() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir, true);

        let view = app.select_brand("BMW").unwrap();
        let by_category = &view.charts[0];
        let labels: Vec<&str> = by_category.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Luxury", "Mid Budget"]);
        assert_eq!(by_category.bars[0].value, 64_740.0);

        let by_drive_train = &view.charts[1];
        assert_eq!(by_drive_train.bars.len(), 3);
        assert_eq!(by_drive_train.bars[2].label, "Rear");
        assert_eq!(by_drive_train.bars[2].value, 28_495.0);
    }

    #[test]
    fn test_unknown_brand_is_empty_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir, true);

        let view = app.select_brand("Ferrari").unwrap();
        assert!(view.records.is_empty());
        assert!(view.charts[2].is_empty());
        assert!(!view.charts[0].is_empty());
    }

    #[test]
    fn test_brand_chart_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir, false);
        assert_eq!(app.select_brand("Acura").unwrap().charts.len(), 2);
    }

    #[test]
    fn test_file_read_once_per_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir, true);

        app.brands().unwrap();
        app.select_brand("Acura").unwrap();
        app.select_brand("Audi").unwrap();
        assert_eq!(app.cache().load_count(), 1);

        app.reload();
        app.select_brand("BMW").unwrap();
        assert_eq!(app.cache().load_count(), 2);
    }

    #[test]
    fn test_export_brand() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir, true);

        let path = app.export_brand("Acura").unwrap();
        assert_eq!(path, dir.path().join("exports").join("Acura_cars.csv"));
        let text = fs::read_to_string(path).unwrap();
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_missing_source_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = DashboardApp::new(DashboardSettings {
            csv_path: dir.path().join("missing.csv"),
            ..Default::default()
        });
        assert!(matches!(
            app.select_brand("Acura"),
            Err(AppError::Loader(LoaderError::FileNotFound(_)))
        ));
    }
}
