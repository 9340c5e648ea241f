pub(crate) mod advisors;
pub(crate) mod companies;
pub(crate) mod health;
pub(crate) mod investments;
pub(crate) mod investors;
pub(crate) mod portfolios;
