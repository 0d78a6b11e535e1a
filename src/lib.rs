// Household Model - Core Library
// Money, Job, Person and Family, for use by the demo binary and tests

pub mod config;
pub mod entities;
pub mod error;

// Re-export commonly used types
pub use config::ModelConfig;
pub use entities::{
    can_hold_job, can_marry, qualifies_as_family, rate_to_usd,
    Currency, IntoMoney, Mathematics, Money, RatePolicy, UnsupportedCode,
    Job, Salary, SalaryPeriod,
    Person, PersonId, PersonRegistry,
    Family, HOUSEHOLD_HOURS,
};
pub use error::{DomainError, Result};
