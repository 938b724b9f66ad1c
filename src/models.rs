pub mod company;
pub mod dashboard;
pub mod inventory;
pub mod money;
pub mod person;
pub mod user;
