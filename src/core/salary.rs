//! 單筆職缺的薪資估算。
//!
//! 上下限都有時取平均；只有下限時乘 1.2；只有上限時乘 0.8。
//! 以整數運算 (×6/5、×4/5) 計算，結果無條件捨去到整數盧布。

use crate::domain::model::{HeadHunterListing, Listing, SuperJobListing};

pub const HEADHUNTER_CURRENCY: &str = "RUR";
pub const SUPERJOB_CURRENCY: &str = "rub";

/// 超過此值的薪資視為資料錯誤
pub const MAX_SALARY: f64 = 1e12;

/// 數值需為有限且介於 1 與 MAX_SALARY 之間才算有填 (SuperJob 以 0 表示未填)
fn bound(value: Option<f64>) -> Option<u64> {
    value
        .filter(|v| v.is_finite() && (1.0..=MAX_SALARY).contains(v))
        .map(|v| v as u64)
}

/// 溢位時回傳 None
pub fn predict_salary(salary_from: Option<u64>, salary_to: Option<u64>) -> Option<u64> {
    match (salary_from, salary_to) {
        (Some(from), Some(to)) => from.checked_add(to).map(|sum| sum / 2),
        (Some(from), None) => from.checked_mul(6).map(|v| v / 5),
        (None, Some(to)) => to.checked_mul(4).map(|v| v / 5),
        (None, None) => None,
    }
}

pub fn predict_rub_salary_hh(listing: &HeadHunterListing) -> Option<u64> {
    let salary = listing.salary.as_ref()?;
    if salary.currency.as_deref() != Some(HEADHUNTER_CURRENCY) {
        return None;
    }
    predict_salary(bound(salary.from), bound(salary.to))
}

pub fn predict_rub_salary_sj(listing: &SuperJobListing) -> Option<u64> {
    if let Some(currency) = listing.currency.as_deref() {
        if currency != SUPERJOB_CURRENCY {
            return None;
        }
    }
    predict_salary(bound(listing.payment_from), bound(listing.payment_to))
}

pub fn predict_rub_salary(listing: &Listing) -> Option<u64> {
    match listing {
        Listing::HeadHunter(hh) => predict_rub_salary_hh(hh),
        Listing::SuperJob(sj) => predict_rub_salary_sj(sj),
    }
}
