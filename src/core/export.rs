use crate::domain::model::{ExportFormat, SalaryStatistics};
use crate::domain::ports::Storage;
use crate::utils::error::Result;

const CSV_HEADER: [&str; 4] = [
    "language",
    "vacancies_found",
    "vacancies_processed",
    "average_salary",
];

pub fn to_csv(statistics: &SalaryStatistics) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        writer.write_record(CSV_HEADER)?;
        for row in &statistics.languages {
            writer.write_record([
                row.language.clone(),
                row.stats.vacancies_found.to_string(),
                row.stats.vacancies_processed.to_string(),
                row.stats.average_salary.to_string(),
            ])?;
        }
        writer.flush()?;
    }
    Ok(buffer)
}

pub fn to_json(statistics: &SalaryStatistics) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(statistics)?)
}

pub struct StatsExporter<S: Storage> {
    storage: S,
}

impl<S: Storage> StatsExporter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn file_name(statistics: &SalaryStatistics, format: ExportFormat) -> String {
        format!(
            "{}_salaries.{}",
            statistics.source.slug(),
            format.extension()
        )
    }

    /// 依格式寫出統計檔，回傳寫入的路徑
    pub async fn export(
        &self,
        statistics: &SalaryStatistics,
        formats: &[ExportFormat],
    ) -> Result<Vec<String>> {
        let mut written = Vec::new();
        for format in formats {
            let data = match format {
                ExportFormat::Csv => to_csv(statistics)?,
                ExportFormat::Json => to_json(statistics)?,
            };
            let file_name = Self::file_name(statistics, *format);

            tracing::debug!("Writing {} ({} bytes) to storage", file_name, data.len());
            self.storage.write_file(&file_name, &data).await?;
            written.push(self.storage.display_path(&file_name));
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{LanguageStats, SourceKind};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }

        fn display_path(&self, path: &str) -> String {
            format!("mock/{}", path)
        }
    }

    fn sample() -> SalaryStatistics {
        let mut statistics = SalaryStatistics::new(SourceKind::HeadHunter);
        statistics.push(
            "Python",
            LanguageStats {
                vacancies_found: 120,
                vacancies_processed: 40,
                average_salary: 210000,
            },
        );
        statistics.push("C#", LanguageStats::default());
        statistics
    }

    #[test]
    fn test_csv_layout() {
        let csv = String::from_utf8(to_csv(&sample()).unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines,
            vec![
                "language,vacancies_found,vacancies_processed,average_salary",
                "Python,120,40,210000",
                "C#,0,0,0",
            ]
        );
    }

    #[test]
    fn test_json_flattens_stats() {
        let json: serde_json::Value = serde_json::from_slice(&to_json(&sample()).unwrap()).unwrap();

        assert_eq!(json["source"], "headhunter");
        assert_eq!(json["title"], "HeadHunter Moscow");
        assert_eq!(json["languages"][0]["language"], "Python");
        assert_eq!(json["languages"][0]["average_salary"], 210000);
        assert_eq!(json["languages"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_export_writes_requested_formats() {
        let storage = MockStorage::default();
        let exporter = StatsExporter::new(storage.clone());

        let written = exporter
            .export(&sample(), &[ExportFormat::Csv, ExportFormat::Json])
            .await
            .unwrap();

        assert_eq!(written, vec!["mock/hh_salaries.csv", "mock/hh_salaries.json"]);
        assert!(storage.get_file("hh_salaries.csv").await.is_some());
        assert!(storage.get_file("hh_salaries.json").await.is_some());
    }

    #[tokio::test]
    async fn test_export_without_formats_writes_nothing() {
        let storage = MockStorage::default();
        let exporter = StatsExporter::new(storage.clone());

        let written = exporter.export(&sample(), &[]).await.unwrap();

        assert!(written.is_empty());
        assert!(storage.files.lock().await.is_empty());
    }
}
