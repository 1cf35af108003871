pub mod build;
pub mod ori;
pub mod sites;
