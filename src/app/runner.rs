use crate::adapters::{HeadHunterClient, LocalStorage, SuperJobClient};
use crate::core::etl::StatsEngine;
use crate::core::export::StatsExporter;
use crate::core::table::render_table;
use crate::domain::model::{SalaryStatistics, SourceKind};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ErrorSeverity, Result, StatsError};

#[derive(Debug)]
pub struct SourceFailure {
    pub source: SourceKind,
    pub error: StatsError,
}

/// 所有來源跑完後的結果
#[derive(Debug, Default)]
pub struct RunSummary {
    pub statistics: Vec<SalaryStatistics>,
    pub failures: Vec<SourceFailure>,
    pub worst: Option<ErrorSeverity>,
}

impl RunSummary {
    pub fn exit_code(&self) -> i32 {
        self.worst.map_or(0, ErrorSeverity::exit_code)
    }

    fn record(&mut self, source: SourceKind, error: StatsError) {
        tracing::error!(
            "❌ {} failed: {} (Category: {:?}, Severity: {:?})",
            source,
            error,
            error.category(),
            error.severity()
        );
        self.worst = self.worst.max(Some(error.severity()));
        self.failures.push(SourceFailure { source, error });
    }
}

/// 依設定順序處理每個來源；單一來源失敗 (抓取、繪表或匯出) 只記錄錯誤，其餘來源照常執行。
/// 每張表格會交給 `print`。
pub async fn run_sources<C>(config: &C, mut print: impl FnMut(&str)) -> RunSummary
where
    C: ConfigProvider + ?Sized,
{
    let mut summary = RunSummary::default();

    for kind in config.sources() {
        let statistics = match collect(*kind, config).await {
            Ok(statistics) => statistics,
            Err(e) => {
                summary.record(*kind, e);
                continue;
            }
        };

        if let Err(e) = report(&statistics, config, &mut print).await {
            summary.record(*kind, e);
        }
        summary.statistics.push(statistics);
    }

    summary
}

async fn collect<C>(kind: SourceKind, config: &C) -> Result<SalaryStatistics>
where
    C: ConfigProvider + ?Sized,
{
    let languages = config.languages().to_vec();
    match kind {
        SourceKind::HeadHunter => {
            let client =
                HeadHunterClient::new(config.headhunter(), config.search(), &config.http())?;
            StatsEngine::new(client, languages).run().await
        }
        SourceKind::SuperJob => {
            let client =
                SuperJobClient::new(config.superjob(), config.search(), &config.http())?;
            StatsEngine::new(client, languages).run().await
        }
    }
}

async fn report<C>(
    statistics: &SalaryStatistics,
    config: &C,
    print: &mut impl FnMut(&str),
) -> Result<()>
where
    C: ConfigProvider + ?Sized,
{
    let table = render_table(statistics)?;
    print(&table);

    if let Some(output_path) = config.output_path() {
        let exporter = StatsExporter::new(LocalStorage::new(output_path.to_string()));
        for path in exporter
            .export(statistics, config.export_formats())
            .await?
        {
            tracing::info!("📁 Statistics saved to: {}", path);
        }
    }

    Ok(())
}
