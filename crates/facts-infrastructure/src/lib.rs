pub mod config_service;
mod dto;
pub mod rest_countries_repository;

pub use config_service::ConfigService;
pub use rest_countries_repository::RestCountriesRepository;
