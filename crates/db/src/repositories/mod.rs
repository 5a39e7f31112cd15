//! Repositories: one struct of static async functions per table.

mod order_repo;
mod playlist_repo;
mod settings_repo;
mod tariff_repo;

pub use order_repo::OrderRepo;
pub use playlist_repo::PlaylistRepo;
pub use settings_repo::SettingsRepo;
pub use tariff_repo::TariffRepo;
