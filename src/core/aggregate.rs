use crate::core::salary::predict_rub_salary;
use crate::domain::model::{LanguageStats, Listing};

/// 逐筆累加職缺，最後產生單一語言的統計
#[derive(Debug, Clone, Default)]
pub struct SalaryAggregator {
    found: u64,
    processed: u64,
    total_salary: u128,
}

impl SalaryAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, listing: &Listing) {
        self.found += 1;
        if let Some(salary) = predict_rub_salary(listing) {
            self.processed += 1;
            self.total_salary += u128::from(salary);
        }
    }

    pub fn finish(&self) -> LanguageStats {
        // 平均值不會超過單筆最大估算，轉回 u64 不會截斷
        let average_salary = if self.processed > 0 {
            (self.total_salary / u128::from(self.processed)) as u64
        } else {
            0
        };

        LanguageStats {
            vacancies_found: self.found,
            vacancies_processed: self.processed,
            average_salary,
        }
    }
}

pub fn aggregate<'a, I>(listings: I) -> LanguageStats
where
    I: IntoIterator<Item = &'a Listing>,
{
    let mut aggregator = SalaryAggregator::new();
    for listing in listings {
        aggregator.push(listing);
    }
    aggregator.finish()
}
