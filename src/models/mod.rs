mod advisor;
mod company;
mod holding;
mod investment;
mod investor;
mod portfolio;

pub use advisor::{Advisor, AdvisorQualification, CreateAdvisor};
pub use company::{Company, CreateCompany, UpdateCompany};
pub use holding::{AssetClass, Holding};
pub use investment::{CreateInvestmentOption, Investment, InvestmentOption};
pub use investor::{CreateInvestor, Investor, UpdateInvestor};
pub use portfolio::{CreatePortfolio, Portfolio};
