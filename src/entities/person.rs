// 🧑 Person Entity - identity plus optional job and spouse
//
// People live in a PersonRegistry and point at each other through PersonId
// handles. A spouse is a handle, not an owned Person, so two people married
// to each other never own one another.
//
// Age gating happens once, at construction:
// - job is kept only if age >= 16
// - spouse is kept only if age >= 18
// Later changes to age do not retract either.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

use super::job::Job;
use crate::error::{DomainError, Result};

pub const MIN_WORKING_AGE: i32 = 16;
pub const MIN_MARRIAGE_AGE: i32 = 18;

pub fn can_hold_job(age: i32) -> bool {
    age >= MIN_WORKING_AGE
}

pub fn can_marry(age: i32) -> bool {
    age >= MIN_MARRIAGE_AGE
}

// ============================================================================
// PERSON ID
// ============================================================================

/// Stable handle into a PersonRegistry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(Uuid);

impl PersonId {
    pub fn new() -> Self {
        PersonId(Uuid::new_v4())
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// PERSON ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Stable identity, never changes
    pub id: PersonId,

    /// Given name; an empty first name hides this person as a spouse in descriptions
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Not validated on direct assignment; see `set_age`
    pub age: i32,

    /// Owned job, kept at construction only from age 16
    pub job: Option<Job>,

    /// Kept at construction only from age 18.
    /// Back-reference into the registry, not ownership
    pub spouse: Option<PersonId>,
}

impl Person {
    /// Name and age only; no job, no spouse
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: i32) -> Self {
        Person {
            id: PersonId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            job: None,
            spouse: None,
        }
    }

    /// Full shape. `job` and `spouse` are dropped when the person is too young for them.
    pub fn with_relations(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: i32,
        job: Job,
        spouse: Option<PersonId>,
    ) -> Self {
        let mut person = Person::new(first_name, last_name, age);
        if can_hold_job(age) {
            person.job = Some(job);
        }
        if can_marry(age) {
            person.spouse = spouse;
        }
        person
    }

    /// Empty names, age 0
    pub fn empty() -> Self {
        Person::new("", "", 0)
    }

    /// Validating alternative to assigning `age` directly
    pub fn set_age(&mut self, age: i32) -> Result<()> {
        if age < 0 {
            return Err(DomainError::InvalidAge { age });
        }
        self.age = age;
        Ok(())
    }

    /// `"<first> <last>, age <age>[, <job title>][, married to <spouse>]"`
    ///
    /// The job clause needs a non-empty title. The spouse clause needs the
    /// handle to resolve in `people` and the spouse to have a first name.
    pub fn describe(&self, people: &PersonRegistry) -> String {
        let mut description = format!("{} {}, age {}", self.first_name, self.last_name, self.age);

        if let Some(job) = self.job.as_ref().filter(|job| !job.title.is_empty()) {
            description.push_str(&format!(", {}", job.title));
        }

        let spouse = self
            .spouse
            .and_then(|id| people.get(&id))
            .filter(|spouse| !spouse.first_name.is_empty());
        if let Some(spouse) = spouse {
            description.push_str(&format!(
                ", married to {} {}",
                spouse.first_name, spouse.last_name
            ));
        }

        description
    }
}

impl Default for Person {
    fn default() -> Self {
        Person::empty()
    }
}

// ============================================================================
// PERSON REGISTRY
// ============================================================================

/// Arena that owns every Person; everything else holds PersonId handles.
///
/// Each PersonId addresses at most one record. Serialized as a plain list of
/// people; duplicate ids in that list collapse to the last record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Person>", into = "Vec<Person>")]
pub struct PersonRegistry {
    /// One record per id, in first-registration order
    people: Vec<Person>,
}

impl From<Vec<Person>> for PersonRegistry {
    fn from(people: Vec<Person>) -> Self {
        let mut registry = PersonRegistry::new();
        for person in people {
            registry.register(person);
        }
        registry
    }
}

impl From<PersonRegistry> for Vec<Person> {
    fn from(registry: PersonRegistry) -> Self {
        registry.people
    }
}

impl PersonRegistry {
    pub fn new() -> Self {
        PersonRegistry { people: Vec::new() }
    }

    /// Take ownership of a person and hand back its handle.
    ///
    /// A person whose id is already registered replaces the existing record
    /// in place, so the handle keeps pointing at exactly one record.
    pub fn register(&mut self, person: Person) -> PersonId {
        let id = person.id;
        match self.get_mut(&id) {
            Some(existing) => {
                debug!(%id, "replacing registered person with the same id");
                *existing = person;
            }
            None => self.people.push(person),
        }
        id
    }

    pub fn get(&self, id: &PersonId) -> Option<&Person> {
        self.people.iter().find(|p| p.id == *id)
    }

    pub fn get_mut(&mut self, id: &PersonId) -> Option<&mut Person> {
        self.people.iter_mut().find(|p| p.id == *id)
    }

    pub fn contains(&self, id: &PersonId) -> bool {
        self.get(id).is_some()
    }

    pub fn count(&self) -> usize {
        self.people.len()
    }

    /// All people in registration order
    pub fn all_people(&self) -> &[Person] {
        &self.people
    }

    /// Point two people at each other as spouses.
    ///
    /// Like assigning `spouse` by hand, this skips the construction-time age check.
    pub fn marry(&mut self, a: PersonId, b: PersonId) -> Result<()> {
        for id in [a, b] {
            if !self.contains(&id) {
                return Err(DomainError::PersonNotFound { id });
            }
        }

        if let Some(person) = self.get_mut(&a) {
            person.spouse = Some(b);
        }
        if let Some(person) = self.get_mut(&b) {
            person.spouse = Some(a);
        }
        Ok(())
    }

    pub fn describe(&self, id: &PersonId) -> Result<String> {
        self.get(id)
            .map(|person| person.describe(self))
            .ok_or(DomainError::PersonNotFound { id: *id })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::job::Salary;

    fn king() -> Job {
        Job::new("King", Salary::per_year(500000.0))
    }

    #[test]
    fn test_partial_person_has_no_relations() {
        let arya = Person::new("Arya", "Stark", 16);

        assert_eq!(arya.first_name, "Arya");
        assert_eq!(arya.last_name, "Stark");
        assert_eq!(arya.age, 16);
        assert!(arya.job.is_none());
        assert!(arya.spouse.is_none());
    }

    #[test]
    fn test_empty_person() {
        let nobody = Person::empty();

        assert_eq!(nobody.first_name, "");
        assert_eq!(nobody.last_name, "");
        assert_eq!(nobody.age, 0);
        assert!(nobody.job.is_none());
        assert!(nobody.spouse.is_none());
    }

    #[test]
    fn test_identity_is_unique() {
        assert_ne!(Person::empty().id, Person::empty().id);
    }

    #[test]
    fn test_job_gated_at_sixteen() {
        for age in [0, 10, 15] {
            let person = Person::with_relations("Tina", "Belcher", age, king(), None);
            assert!(person.job.is_none(), "age {} should not hold a job", age);
        }
        for age in [16, 17, 40] {
            let person = Person::with_relations("Tina", "Belcher", age, king(), None);
            assert_eq!(person.job, Some(king()));
        }
    }

    #[test]
    fn test_spouse_gated_at_eighteen() {
        let partner = PersonId::new();

        for age in [0, 16, 17] {
            let person = Person::with_relations("Gene", "Belcher", age, king(), Some(partner));
            assert!(person.spouse.is_none(), "age {} should not be married", age);
        }
        for age in [18, 44] {
            let person = Person::with_relations("Bob", "Belcher", age, king(), Some(partner));
            assert_eq!(person.spouse, Some(partner));
        }
    }

    #[test]
    fn test_gating_is_only_at_construction() {
        let mut person = Person::with_relations("Louise", "Belcher", 9, king(), Some(PersonId::new()));
        person.age = 30;
        assert!(person.job.is_none());

        let mut adult = Person::with_relations("Bob", "Belcher", 44, king(), Some(PersonId::new()));
        adult.age = 5;
        assert!(adult.job.is_some());
        assert!(adult.spouse.is_some());
    }

    #[test]
    fn test_direct_mutation_is_unvalidated() {
        let mut person = Person::new("Gene", "Belcher", 11);
        person.age = -3;
        person.job = Some(king());

        assert_eq!(person.age, -3);
        assert!(person.job.is_some());
    }

    #[test]
    fn test_set_age_rejects_negative() {
        let mut person = Person::new("Gene", "Belcher", 11);

        assert_eq!(person.set_age(-1), Err(DomainError::InvalidAge { age: -1 }));
        assert_eq!(person.age, 11);

        person.set_age(12).unwrap();
        assert_eq!(person.age, 12);
    }

    #[test]
    fn test_describe_name_and_age_only() {
        let people = PersonRegistry::new();
        let arya = Person::new("Arya", "Stark", 16);

        assert_eq!(arya.describe(&people), "Arya Stark, age 16");
    }

    #[test]
    fn test_describe_with_job_and_spouse() {
        let mut people = PersonRegistry::new();
        let margaery = people.register(Person::new("Margaery", "Tyrell", 20));
        let joffrey = Person::with_relations("Joffrey", "Baratheon", 19, king(), Some(margaery));

        assert_eq!(
            joffrey.describe(&people),
            "Joffrey Baratheon, age 19, King, married to Margaery Tyrell"
        );
    }

    #[test]
    fn test_describe_skips_empty_job_title_and_unnamed_spouse() {
        let mut people = PersonRegistry::new();
        let nobody = people.register(Person::empty());
        let bob = Person::with_relations("Bob", "Belcher", 44, Job::default(), Some(nobody));

        assert_eq!(bob.describe(&people), "Bob Belcher, age 44");
    }

    #[test]
    fn test_describe_skips_unknown_spouse_handle() {
        let people = PersonRegistry::new();
        let bob = Person::with_relations("Bob", "Belcher", 44, king(), Some(PersonId::new()));

        assert_eq!(bob.describe(&people), "Bob Belcher, age 44, King");
    }

    #[test]
    fn test_registry_register_and_lookup() {
        let mut people = PersonRegistry::new();
        let arya = people.register(Person::new("Arya", "Stark", 16));

        assert_eq!(people.count(), 1);
        assert!(people.contains(&arya));
        assert_eq!(people.get(&arya).unwrap().first_name, "Arya");
        assert!(people.get(&PersonId::new()).is_none());

        people.get_mut(&arya).unwrap().age = 17;
        assert_eq!(people.get(&arya).unwrap().age, 17);
    }

    #[test]
    fn test_marry_forms_mutual_reference() {
        let mut people = PersonRegistry::new();
        let bob = people.register(Person::new("Bob", "Belcher", 44));
        let linda = people.register(Person::new("Linda", "Belcher", 42));

        people.marry(bob, linda).unwrap();

        assert_eq!(people.get(&bob).unwrap().spouse, Some(linda));
        assert_eq!(people.get(&linda).unwrap().spouse, Some(bob));
        assert_eq!(
            people.describe(&bob).unwrap(),
            "Bob Belcher, age 44, married to Linda Belcher"
        );
        assert_eq!(
            people.describe(&linda).unwrap(),
            "Linda Belcher, age 42, married to Bob Belcher"
        );
    }

    #[test]
    fn test_marry_unknown_person_fails() {
        let mut people = PersonRegistry::new();
        let bob = people.register(Person::new("Bob", "Belcher", 44));
        let ghost = PersonId::new();

        assert_eq!(
            people.marry(bob, ghost),
            Err(DomainError::PersonNotFound { id: ghost })
        );
        assert!(people.get(&bob).unwrap().spouse.is_none());
    }

    #[test]
    fn test_registry_describe_unknown() {
        let people = PersonRegistry::new();
        assert!(people.describe(&PersonId::new()).is_err());
    }

    #[test]
    fn test_register_same_id_replaces_record() {
        let mut people = PersonRegistry::new();
        let bob = Person::new("Bob", "Belcher", 44);
        let mut older_bob = bob.clone();
        older_bob.age = 45;

        let first = people.register(bob);
        let second = people.register(older_bob);
        let linda = people.register(Person::new("Linda", "Belcher", 42));

        assert_eq!(first, second);
        assert_eq!(people.count(), 2);
        assert_eq!(people.get(&first).unwrap().age, 45);
        assert_eq!(people.all_people()[0].id, first);

        people.marry(first, linda).unwrap();
        let records: Vec<&Person> = people
            .all_people()
            .iter()
            .filter(|p| p.id == first)
            .collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].spouse, Some(linda));
    }

    #[test]
    fn test_deserialize_collapses_duplicate_ids() {
        let bob = Person::new("Bob", "Belcher", 44);
        let mut renamed = bob.clone();
        renamed.first_name = "Robert".to_string();
        let linda = Person::new("Linda", "Belcher", 42);

        let json = serde_json::to_string(&vec![bob.clone(), linda.clone(), renamed]).unwrap();
        let people: PersonRegistry = serde_json::from_str(&json).unwrap();

        assert_eq!(people.count(), 2);
        assert_eq!(people.get(&bob.id).unwrap().first_name, "Robert");
        assert_eq!(people.all_people()[1], linda);
    }

    #[test]
    fn test_serialize_round_trip() {
        let mut people = PersonRegistry::new();
        let bob = people.register(Person::new("Bob", "Belcher", 44));
        let linda = people.register(Person::new("Linda", "Belcher", 42));
        people.marry(bob, linda).unwrap();

        let json = serde_json::to_string(&people).unwrap();
        let restored: PersonRegistry = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.all_people(), people.all_people());
        assert_eq!(restored.describe(&bob).unwrap(), "Bob Belcher, age 44, married to Linda Belcher");
    }
}
