use crate::domain::model::{
    ExportFormat, HeadHunterSettings, HttpSettings, Listing, SearchSettings, SourceKind,
    SuperJobSettings,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// 給使用者看的完整路徑
    fn display_path(&self, path: &str) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn languages(&self) -> &[String];
    fn sources(&self) -> &[SourceKind];
    fn search(&self) -> SearchSettings;
    fn http(&self) -> HttpSettings;
    fn headhunter(&self) -> HeadHunterSettings;
    fn superjob(&self) -> SuperJobSettings;
    fn output_path(&self) -> Option<&str>;
    fn export_formats(&self) -> &[ExportFormat];
}

/// 職缺資料來源：回傳某語言所有分頁合併後的職缺
#[async_trait]
pub trait VacancySource: Send + Sync {
    fn kind(&self) -> SourceKind;
    async fn fetch_listings(&self, language: &str) -> Result<Vec<Listing>>;
}
