// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// ISO calendar date as entered in forms.
const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Short US-style date used in list views (e.g. `1/31/2025`).
const SHORT_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month padding:none]/[day padding:none]/[year]");

/// An account holder's honorific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Title {
    /// Mr.
    #[default]
    Mr,
    /// Mrs.
    Mrs,
    /// Ms.
    Ms,
    /// Miss.
    Miss,
    /// Dr.
    Dr,
}

impl Title {
    /// All selectable titles, in display order.
    pub const ALL: [Self; 5] = [Self::Mr, Self::Mrs, Self::Ms, Self::Miss, Self::Dr];

    /// Converts this title to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mr => "Mr",
            Self::Mrs => "Mrs",
            Self::Ms => "Ms",
            Self::Miss => "Miss",
            Self::Dr => "Dr",
        }
    }
}

impl FromStr for Title {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|title| title.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidChoice {
                field: "title",
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The privilege level of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    /// Administrator.
    Admin,
    /// Regular user.
    #[default]
    User,
}

impl Role {
    /// All selectable roles, in display order.
    pub const ALL: [Self; 2] = [Self::Admin, Self::User];

    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::User => "User",
        }
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Self::Admin),
            "User" => Ok(Self::User),
            _ => Err(ValidationError::InvalidChoice {
                field: "role",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an account or employee is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RecordStatus {
    /// Active.
    #[default]
    Active,
    /// Inactive.
    Inactive,
}

impl RecordStatus {
    /// All selectable statuses, in display order.
    pub const ALL: [Self; 2] = [Self::Active, Self::Inactive];

    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    /// Returns whether this status is `Active`.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl FromStr for RecordStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            _ => Err(ValidationError::InvalidChoice {
                field: "status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The review state of a request.
///
/// New requests always start as `Pending`; the request form cannot change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RequestStatus {
    /// Awaiting review.
    #[default]
    Pending,
    /// Approved.
    Approved,
    /// Rejected.
    Rejected,
}

impl RequestStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a request is for.
///
/// `Equipment` and `Leave` are the offered choices; any other non-empty
/// text is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RequestType {
    /// Equipment purchase or loan.
    #[default]
    Equipment,
    /// Leave of absence.
    Leave,
    /// Any other request type.
    Other(String),
}

impl RequestType {
    /// The request types offered by the request form.
    pub const OFFERED: [Self; 2] = [Self::Equipment, Self::Leave];

    /// Returns the display name of this request type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Equipment => "Equipment",
            Self::Leave => "Leave",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for RequestType {
    fn from(s: &str) -> Self {
        match s {
            "Equipment" => Self::Equipment,
            "Leave" => Self::Leave,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The externally visible employee code, e.g. `EMP001`.
///
/// The code is chosen when the employee is created and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeCode(String);

impl EmployeeCode {
    /// Creates a code from user input.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Builds the suggested code for the `n`th employee: `EMP` followed by
    /// `n` zero-padded to three digits.
    #[must_use]
    pub fn sequence(n: usize) -> Self {
        Self(format!("EMP{n:03}"))
    }

    /// Returns the code.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmployeeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One requested item and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineItem {
    /// What is requested.
    pub name: String,
    /// How many; at least 1.
    pub quantity: u32,
}

impl LineItem {
    /// Creates a new line item.
    #[must_use]
    pub fn new(name: &str, quantity: u32) -> Self {
        Self {
            name: name.to_string(),
            quantity,
        }
    }

    /// Formats the item as `name (xquantity)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} (x{})", self.name, self.quantity)
    }
}

/// Parses a `YYYY-MM-DD` date entered in a form.
///
/// # Errors
///
/// Returns `ValidationError::InvalidDate` if the value is not a calendar date.
pub fn parse_iso_date(field: &'static str, value: &str) -> Result<Date, ValidationError> {
    Date::parse(value, ISO_DATE).map_err(|_| ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Formats a date as `YYYY-MM-DD`, the form input representation.
#[must_use]
pub fn format_iso_date(date: Date) -> String {
    date.format(ISO_DATE).unwrap_or_else(|_| date.to_string())
}

/// Formats a date the way list views show it, e.g. `2/1/2025`.
#[must_use]
pub fn format_short_date(date: Date) -> String {
    date.format(SHORT_DATE).unwrap_or_else(|_| date.to_string())
}
