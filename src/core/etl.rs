use crate::core::aggregate::aggregate;
use crate::domain::model::SalaryStatistics;
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;

pub struct StatsEngine<V: VacancySource> {
    source: V,
    languages: Vec<String>,
}

impl<V: VacancySource> StatsEngine<V> {
    pub fn new(source: V, languages: Vec<String>) -> Self {
        Self { source, languages }
    }

    /// 依序抓取每個語言的職缺並彙總；任何一次抓取失敗即中止整個來源
    pub async fn run(&self) -> Result<SalaryStatistics> {
        let kind = self.source.kind();
        tracing::info!(
            "📊 Collecting {} statistics for {} languages",
            kind,
            self.languages.len()
        );

        let mut statistics = SalaryStatistics::new(kind);
        for language in &self.languages {
            let listings = self.source.fetch_listings(language).await?;
            let stats = aggregate(&listings);

            tracing::info!(
                "{} / {}: found {}, processed {}, average {}",
                kind,
                language,
                stats.vacancies_found,
                stats.vacancies_processed,
                stats.average_salary
            );
            statistics.push(language.clone(), stats);
        }

        Ok(statistics)
    }
}
