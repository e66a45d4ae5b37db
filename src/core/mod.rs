pub mod aggregate;
pub mod etl;
pub mod export;
pub mod salary;
pub mod table;

pub use crate::domain::model::{LanguageStats, Listing, SalaryStatistics};
pub use crate::domain::ports::{ConfigProvider, Storage, VacancySource};
pub use crate::utils::error::Result;
