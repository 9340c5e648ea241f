pub mod advisor_service;
pub mod company_service;
pub mod investment_service;
pub mod investor_service;
pub mod portfolio_service;
