// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staffdesk_domain::{
    Account, Department, DomainError, Employee, EntityKind, Record, RecordId, Request, next_id,
};

/// An ordered collection of records of one kind.
///
/// Records keep their insertion order, which is also their display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository<T: Record> {
    records: Vec<T>,
}

impl<T: Record> Repository<T> {
    /// Creates an empty repository.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Creates a repository holding the given records in order.
    #[must_use]
    pub const fn from_records(records: Vec<T>) -> Self {
        Self { records }
    }

    /// Looks up a record by identifier.
    #[must_use]
    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Looks up a record, failing with `RecordNotFound` if it is absent.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RecordNotFound` if no record has this identifier.
    pub fn require(&self, id: T::Id) -> Result<&T, DomainError> {
        self.get(id).ok_or(DomainError::RecordNotFound {
            entity: T::KIND,
            id: id.value(),
        })
    }

    /// Iterates over the records in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the repository holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the identifier the next created record will receive.
    #[must_use]
    pub fn next_id(&self) -> T::Id {
        next_id(self.records.iter().map(|record| record.id()))
    }

    /// Appends a record.
    pub(crate) fn push(&mut self, record: T) {
        self.records.push(record);
    }

    /// Returns a mutable reference to a record.
    pub(crate) fn get_mut(&mut self, id: T::Id) -> Option<&mut T> {
        self.records.iter_mut().find(|record| record.id() == id)
    }
}

impl<T: Record> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Record> IntoIterator for &'a Repository<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// All record collections of the application.
///
/// The four collections are independent: nothing keeps cross references
/// consistent, and readers resolve references at read time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Store {
    /// User accounts.
    pub accounts: Repository<Account>,
    /// Employees.
    pub employees: Repository<Employee>,
    /// Departments.
    pub departments: Repository<Department>,
    /// Requests.
    pub requests: Repository<Request>,
}

impl Store {
    /// Creates a store with four empty collections.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            accounts: Repository::new(),
            employees: Repository::new(),
            departments: Repository::new(),
            requests: Repository::new(),
        }
    }

    /// Returns a one-line summary of collection sizes, for logging.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "accounts={},employees={},departments={},requests={}",
            self.accounts.len(),
            self.employees.len(),
            self.departments.len(),
            self.requests.len()
        )
    }
}

/// Which record a successful save touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedRecord {
    /// The entity kind.
    pub entity: EntityKind,
    /// The record identifier.
    pub id: u32,
    /// `true` if the record was created, `false` if an existing one was edited.
    pub created: bool,
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new store after the transition.
    pub new_store: Store,
    /// The record that was saved.
    pub saved: SavedRecord,
}
