// Entity Models
// Leaves first: Money and Job stand alone, Person holds a Job and a spouse
// handle, Family holds Person handles.
//
// People are owned by a PersonRegistry; everything else refers to them by PersonId.

pub mod money;
pub mod job;
pub mod person;
pub mod family;

pub use money::{rate_to_usd, Currency, IntoMoney, Mathematics, Money, RatePolicy, UnsupportedCode};
pub use job::{Job, Salary, SalaryPeriod};
pub use person::{can_hold_job, can_marry, Person, PersonId, PersonRegistry};
pub use family::{qualifies_as_family, Family, HOUSEHOLD_HOURS};
