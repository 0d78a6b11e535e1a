// 👪 Family Entity - an ordered list of people
//
// A family only forms around someone older than 21. Given a list with no
// such member, the whole list is discarded and the family starts empty.
// This is all-or-nothing, not a per-member filter.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::person::{Person, PersonId, PersonRegistry};
use crate::error::{DomainError, Result};

/// A family needs at least one member strictly older than this
pub const HEAD_OF_HOUSEHOLD_AGE: i32 = 21;

/// Hours per year assumed for hourly wages, regardless of the actual period
pub const HOUSEHOLD_HOURS: f64 = 2000.0;

/// Gating predicate: does any member resolve to a person older than 21?
pub fn qualifies_as_family(members: &[PersonId], people: &PersonRegistry) -> bool {
    members
        .iter()
        .filter_map(|id| people.get(id))
        .any(|person| person.age > HEAD_OF_HOUSEHOLD_AGE)
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Family {
    /// Handles into the PersonRegistry, in the order given (children appended)
    pub members: Vec<PersonId>,
}

impl Family {
    /// Keep `members` as given if anyone qualifies, otherwise start empty
    pub fn new(members: Vec<PersonId>, people: &PersonRegistry) -> Self {
        if qualifies_as_family(&members, people) {
            return Family { members };
        }

        debug!(
            discarded = members.len(),
            "no member older than {}, family starts empty", HEAD_OF_HOUSEHOLD_AGE
        );
        Family::default()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: &PersonId) -> bool {
        self.members.contains(id)
    }

    /// Sum of yearly incomes at the standard 2000-hour assumption
    pub fn household_income(&self, people: &PersonRegistry) -> f64 {
        self.household_income_for(HOUSEHOLD_HOURS, people)
    }

    /// Members without a job (or missing from the registry) contribute nothing
    pub fn household_income_for(&self, hours: f64, people: &PersonRegistry) -> f64 {
        self.members
            .iter()
            .filter_map(|id| people.get(id))
            .filter_map(|person| person.job.as_ref())
            .map(|job| job.calculate_income(hours))
            .sum()
    }

    /// Register a newborn (age 0, no job, no spouse) and add it to the family
    pub fn have_child(
        &mut self,
        people: &mut PersonRegistry,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> PersonId {
        let child = people.register(Person::new(first_name, last_name, 0));
        self.members.push(child);
        child
    }

    /// Member descriptions joined with `"; "`.
    ///
    /// An empty family has nothing to describe and returns `EmptyFamily`.
    pub fn describe(&self, people: &PersonRegistry) -> Result<String> {
        if self.members.is_empty() {
            return Err(DomainError::EmptyFamily);
        }

        let descriptions = self
            .members
            .iter()
            .map(|id| people.describe(id))
            .collect::<Result<Vec<String>>>()?;

        Ok(descriptions.join("; "))
    }
}

// ============================================================================
// TESTS
// ============================================================================
