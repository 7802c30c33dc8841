/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::date::CalendarDate;
use super::enums::{CompanyRole, CompanyType, ProfileType, QuoteType, RateType};
use super::requests::QuoteRequest;
use crate::http::{Result, TransferwiseError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDetails {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<CalendarDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_address: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub registration_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_type: Option<CompanyType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_role: Option<CompanyRole>,
    #[serde(
        default,
        rename = "descriptionOfBusiness",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webpage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_address: Option<i64>,
}

/// Personal profile view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Assigned by the API once the profile exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub details: PersonDetails,
}

/// Business profile view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub details: BusinessDetails,
}

/// Profile as returned by the API, discriminated by its `type` field
///
/// A discriminator other than `personal`/`business` decodes as `Unknown`, which
/// has neither typed view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Profile {
    Personal(Person),
    Business(Business),
    #[serde(other)]
    Unknown,
}

impl Profile {
    pub fn id(&self) -> Option<i64> {
        match self {
            Profile::Personal(person) => person.id,
            Profile::Business(business) => business.id,
            Profile::Unknown => None,
        }
    }

    pub fn profile_type(&self) -> ProfileType {
        match self {
            Profile::Personal(_) => ProfileType::Personal,
            Profile::Business(_) => ProfileType::Business,
            Profile::Unknown => ProfileType::Unknown,
        }
    }

    pub fn is_person(&self) -> bool {
        matches!(self, Profile::Personal(_))
    }

    pub fn is_business(&self) -> bool {
        matches!(self, Profile::Business(_))
    }

    pub fn as_person(&self) -> Option<&Person> {
        match self {
            Profile::Personal(person) => Some(person),
            _ => None,
        }
    }

    pub fn as_business(&self) -> Option<&Business> {
        match self {
            Profile::Business(business) => Some(business),
            _ => None,
        }
    }

    pub fn into_person(self) -> Option<Person> {
        match self {
            Profile::Personal(person) => Some(person),
            _ => None,
        }
    }

    pub fn into_business(self) -> Option<Business> {
        match self {
            Profile::Business(business) => Some(business),
            _ => None,
        }
    }

    /// Like [`Profile::into_person`], failing with a type mismatch instead of `None`.
    pub fn try_into_person(self) -> Result<Person> {
        match self {
            Profile::Personal(person) => Ok(person),
            other => Err(TransferwiseError::ProfileTypeMismatch {
                expected: ProfileType::Personal,
                actual: other.profile_type(),
            }),
        }
    }

    pub fn try_into_business(self) -> Result<Business> {
        match self {
            Profile::Business(business) => Ok(business),
            other => Err(TransferwiseError::ProfileTypeMismatch {
                expected: ProfileType::Business,
                actual: other.profile_type(),
            }),
        }
    }

    /// Build a fixed-rate quote request scoped to this profile.
    ///
    /// Exactly one of `target_amount` / `source_amount` must be positive.
    pub fn quote_request(
        &self,
        source: impl Into<String>,
        target: impl Into<String>,
        target_amount: Option<Decimal>,
        source_amount: Option<Decimal>,
        quote_type: QuoteType,
    ) -> Result<QuoteRequest> {
        let profile_id = self.id().ok_or_else(|| {
            TransferwiseError::Validation("profile has no id; create it before quoting".to_string())
        })?;
        QuoteRequest::new(
            profile_id,
            source,
            target,
            target_amount,
            source_amount,
            quote_type,
        )
    }
}

impl From<Person> for Profile {
    fn from(value: Person) -> Self {
        Profile::Personal(value)
    }
}

impl From<Business> for Profile {
    fn from(value: Business) -> Self {
        Profile::Business(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<i64>,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_type: Option<RateType>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_amount: Option<Decimal>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_amount: Option<Decimal>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub quote_type: Option<QuoteType>,
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub fee: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        rename = "createdByUserId",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_by_user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_estimate: Option<DateTime<Utc>>,
    #[serde(default)]
    pub allowed_profile_types: Vec<String>,
    #[serde(default)]
    pub guaranteed_target_amount: bool,
    #[serde(default)]
    pub of_source_amount: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayInDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_in_reference: Option<String>,
}

/// How a payer funds a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayInMethod {
    #[serde(rename = "type")]
    pub method_type: String,
    #[serde(default)]
    pub details: PayInDetails,
}
