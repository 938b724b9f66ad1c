pub mod company_repo;
pub use company_repo::CompanyRepository;
pub mod person_repo;
pub use person_repo::PersonRepository;
pub mod user_repo;
pub use user_repo::UserRepository;
pub mod inventory_repo;
pub use inventory_repo::InventoryRepository;
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
