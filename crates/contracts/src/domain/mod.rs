pub mod common;

pub mod a001_organization;
pub mod a002_billing;
