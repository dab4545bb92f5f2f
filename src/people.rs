//! Person records.

use anyhow::{Context, Result};
use rand::prelude::*;
use rand_distr::Uniform;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Earliest birth year drawn by [`rand_year`].
pub const EARLIEST_BIRTH_YEAR: i32 = 1900;
/// Latest birth year drawn by [`rand_year`].
pub const LATEST_BIRTH_YEAR: i32 = 2020;

const DAYS_PER_YEAR: i64 = 365;

/// Randomly generated person.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub name: String,
    pub fav_color: String,
    pub birth_year: i32,
    /// Month of birth, from 1 (January) to 12 (December).
    pub birth_month: u32,
}

/// Create a new [`Person`] with a random birth year and month.
pub fn make_person<R: Rng + ?Sized>(name: &str, fav_color: &str, rng: &mut R) -> Result<Person> {
    Ok(Person {
        name: name.to_owned(),
        fav_color: fav_color.to_owned(),
        birth_year: rand_year(rng).context("failed to draw birth year")?,
        birth_month: rand_month(rng).context("failed to draw birth month")?,
    })
}

/// Draw a year uniformly from [`EARLIEST_BIRTH_YEAR`] to [`LATEST_BIRTH_YEAR`].
pub fn rand_year<R: Rng + ?Sized>(rng: &mut R) -> Result<i32> {
    let year_dist = Uniform::new_inclusive(EARLIEST_BIRTH_YEAR, LATEST_BIRTH_YEAR)?;
    Ok(year_dist.sample(rng))
}

/// Draw a month uniformly from 1 to 12.
pub fn rand_month<R: Rng + ?Sized>(rng: &mut R) -> Result<u32> {
    let month_dist = Uniform::new_inclusive(1, 12)?;
    Ok(month_dist.sample(rng))
}

/// Failure to read a person record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected person to be a table")]
    NotARecord,

    #[error("missing key '{0}'")]
    MissingKey(String),

    #[error("invalid value for key '{0}'")]
    InvalidField(String),
}

/// Day count, whole for integer ages and fractional for float ages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Days {
    Whole(i64),
    Fractional(f64),
}

impl fmt::Display for Days {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whole(days) => write!(f, "{days}"),
            Self::Fractional(days) => write!(f, "{days:?}"),
        }
    }
}

/// Number of days a person has been alive, counting 365 days per year of age.
#[derive(Debug, Clone, PartialEq)]
pub struct DaysAlive {
    pub name: String,
    pub days: Days,
}

impl fmt::Display for DaysAlive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has been alive for {} days", self.name, self.days)
    }
}

/// Compute how many days the person described by `person` has been alive.
///
/// `person` is expected to be a table with a numeric `age` and a `name`.
/// The `age` key is looked up before `name`. A string name is used as is,
/// any other value is rendered as TOML.
///
/// ```
/// use agestats::people::days_alive;
///
/// let person: toml::Table = toml::from_str(r#"
/// name = "princess kitty"
/// age = 10
/// "#).unwrap();
/// let days = days_alive(&toml::Value::Table(person)).unwrap();
/// assert_eq!(days.to_string(), "princess kitty has been alive for 3650 days");
///
/// let person: toml::Table = toml::from_str(r#"
/// name = "princess kitty"
/// age = 10.5
/// "#).unwrap();
/// let days = days_alive(&toml::Value::Table(person)).unwrap();
/// assert_eq!(days.to_string(), "princess kitty has been alive for 3832.5 days");
/// ```
///
/// # Errors
/// Returns [`RecordError::NotARecord`] if `person` is not a table,
/// [`RecordError::MissingKey`] if `age` or `name` is absent and
/// [`RecordError::InvalidField`] if `age` is not a number or its day
/// count overflows.
pub fn days_alive(person: &toml::Value) -> Result<DaysAlive, RecordError> {
    let table = person.as_table().ok_or(RecordError::NotARecord)?;

    let days = match lookup(table, "age")? {
        toml::Value::Integer(age) => age.checked_mul(DAYS_PER_YEAR).map(Days::Whole),
        toml::Value::Float(age) => Some(Days::Fractional(age * DAYS_PER_YEAR as f64)),
        _ => None,
    }
    .ok_or_else(|| RecordError::InvalidField("age".to_owned()))?;

    let name = match lookup(table, "name")? {
        toml::Value::String(name) => name.clone(),
        other => other.to_string(),
    };

    Ok(DaysAlive { name, days })
}

fn lookup<'a>(table: &'a toml::Table, key: &str) -> Result<&'a toml::Value, RecordError> {
    table
        .get(key)
        .ok_or_else(|| RecordError::MissingKey(key.to_owned()))
}
