// Adapters layer: concrete implementations for external systems (job board APIs, storage).

pub mod headhunter;
pub mod http;
pub mod storage;
pub mod superjob;

pub use headhunter::HeadHunterClient;
pub use storage::LocalStorage;
pub use superjob::SuperJobClient;
