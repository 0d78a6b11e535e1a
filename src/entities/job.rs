// 💼 Job Entity
// A title plus a salary quoted per hour or per year

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::format_amount;

// ============================================================================
// SALARY PERIOD
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SalaryPeriod {
    /// Hourly wage, scaled by hours worked ("per-hour")
    PerHour,

    /// Yearly salary, never scaled ("per-year")
    PerYear,

    /// Unrecognized period string, kept verbatim. Income is not scaled.
    Other(String),
}

impl SalaryPeriod {
    pub fn as_str(&self) -> &str {
        match self {
            SalaryPeriod::PerHour => "per-hour",
            SalaryPeriod::PerYear => "per-year",
            SalaryPeriod::Other(period) => period,
        }
    }
}

impl fmt::Display for SalaryPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SalaryPeriod {
    fn from(period: &str) -> Self {
        match period {
            "per-hour" => SalaryPeriod::PerHour,
            "per-year" => SalaryPeriod::PerYear,
            other => SalaryPeriod::Other(other.to_string()),
        }
    }
}

impl From<String> for SalaryPeriod {
    fn from(period: String) -> Self {
        SalaryPeriod::from(period.as_str())
    }
}

impl From<SalaryPeriod> for String {
    fn from(period: SalaryPeriod) -> Self {
        period.as_str().to_string()
    }
}

// ============================================================================
// SALARY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    /// Pay per period, in dollars
    pub amount: f64,

    /// How `amount` is interpreted
    pub period: SalaryPeriod,
}

impl Salary {
    pub fn new(amount: f64, period: impl Into<SalaryPeriod>) -> Self {
        Salary {
            amount,
            period: period.into(),
        }
    }

    pub fn per_hour(amount: f64) -> Self {
        Salary::new(amount, SalaryPeriod::PerHour)
    }

    pub fn per_year(amount: f64) -> Self {
        Salary::new(amount, SalaryPeriod::PerYear)
    }
}

impl Default for Salary {
    fn default() -> Self {
        Salary::new(0.0, "")
    }
}

// ============================================================================
// JOB ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Job {
    /// Job title; an empty title is left out of person descriptions
    pub title: String,

    /// Pay and the period it is quoted for. `raise` changes the amount.
    pub salary: Salary,
}

impl Job {
    pub fn new(title: impl Into<String>, salary: Salary) -> Self {
        Job {
            title: title.into(),
            salary,
        }
    }

    /// Income for the given hours. Only hourly salaries scale; everything
    /// else is already a yearly figure.
    pub fn calculate_income(&self, hours_worked: f64) -> f64 {
        match self.salary.period {
            SalaryPeriod::PerHour => self.salary.amount * hours_worked,
            _ => self.salary.amount,
        }
    }

    /// Raise the salary by `percent` and round to the nearest cent (ties away from zero)
    pub fn raise(&mut self, percent: f64) {
        let decimal = percent / 100.0;
        self.salary.amount += decimal * self.salary.amount;
        self.salary.amount = (self.salary.amount * 100.0).round() / 100.0;
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: ${} {}",
            self.title,
            format_amount(self.salary.amount),
            self.salary.period
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
