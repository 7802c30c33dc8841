/*
[INPUT]:  Caller-supplied profile, quote and document fields
[OUTPUT]: Validated request payloads with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::date::CalendarDate;
use super::enums::{CompanyRole, CompanyType, DocumentType, ProfileType, QuoteType, RateType};
use super::models::Person;
use crate::http::{Result, TransferwiseError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: CalendarDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfileRequest {
    pub name: String,
    pub registration_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arbn: Option<String>,
    pub company_type: CompanyType,
    pub company_role: CompanyRole,
    #[serde(rename = "descriptionOfBusiness")]
    pub description: String,
    pub webpage: String,
}

/// Body of profile create/update calls: `{"type": ..., "details": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details", rename_all = "lowercase")]
pub enum ProfileRequest {
    Personal(PersonalProfileRequest),
    Business(BusinessProfileRequest),
}

impl ProfileRequest {
    pub fn profile_type(&self) -> ProfileType {
        match self {
            ProfileRequest::Personal(_) => ProfileType::Personal,
            ProfileRequest::Business(_) => ProfileType::Business,
        }
    }
}

impl From<PersonalProfileRequest> for ProfileRequest {
    fn from(value: PersonalProfileRequest) -> Self {
        ProfileRequest::Personal(value)
    }
}

impl From<BusinessProfileRequest> for ProfileRequest {
    fn from(value: BusinessProfileRequest) -> Self {
        ProfileRequest::Business(value)
    }
}

/// The single amount a quote is computed from. Flattened into request
/// bodies as either `targetAmount` or `sourceAmount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuoteAmount {
    /// Amount the recipient should receive
    #[serde(rename = "targetAmount")]
    Target(#[serde(with = "rust_decimal::serde::float")] Decimal),
    /// Amount the sender pays
    #[serde(rename = "sourceAmount")]
    Source(#[serde(with = "rust_decimal::serde::float")] Decimal),
}

impl QuoteAmount {
    /// Pick exactly one of target/source amount.
    ///
    /// Zero counts as unset. Negative amounts, both amounts set, or neither
    /// set are validation errors.
    pub fn resolve(target: Option<Decimal>, source: Option<Decimal>) -> Result<Self> {
        let target = positive_or_unset("target", target)?;
        let source = positive_or_unset("source", source)?;

        match (target, source) {
            (Some(amount), None) => Ok(QuoteAmount::Target(amount)),
            (None, Some(amount)) => Ok(QuoteAmount::Source(amount)),
            (Some(_), Some(_)) => Err(TransferwiseError::Validation(
                "specify either a target or a source amount, not both".to_string(),
            )),
            (None, None) => Err(TransferwiseError::Validation(
                "specify either a target or a source amount".to_string(),
            )),
        }
    }

    pub fn target(&self) -> Option<Decimal> {
        match self {
            QuoteAmount::Target(amount) => Some(*amount),
            QuoteAmount::Source(_) => None,
        }
    }

    pub fn source(&self) -> Option<Decimal> {
        match self {
            QuoteAmount::Source(amount) => Some(*amount),
            QuoteAmount::Target(_) => None,
        }
    }
}

fn positive_or_unset(side: &str, amount: Option<Decimal>) -> Result<Option<Decimal>> {
    match amount {
        Some(value) if value.is_sign_negative() && !value.is_zero() => Err(
            TransferwiseError::Validation(format!("{side} amount must not be negative: {value}")),
        ),
        Some(value) if value.is_zero() => Ok(None),
        other => Ok(other),
    }
}

/// Quote request scoped to a profile. Built through [`QuoteRequest::new`]
/// so exactly one amount is always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    profile: i64,
    source: String,
    target: String,
    rate_type: RateType,
    #[serde(flatten)]
    amount: QuoteAmount,
    #[serde(rename = "type")]
    quote_type: QuoteType,
}

impl QuoteRequest {
    pub fn new(
        profile_id: i64,
        source: impl Into<String>,
        target: impl Into<String>,
        target_amount: Option<Decimal>,
        source_amount: Option<Decimal>,
        quote_type: QuoteType,
    ) -> Result<Self> {
        if quote_type == QuoteType::Unknown {
            return Err(TransferwiseError::Validation(
                "quote type must be a known value".to_string(),
            ));
        }
        let amount = QuoteAmount::resolve(target_amount, source_amount)?;
        Ok(Self {
            profile: profile_id,
            source: source.into(),
            target: target.into(),
            rate_type: RateType::Fixed,
            amount,
            quote_type,
        })
    }

    pub fn profile_id(&self) -> i64 {
        self.profile
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn quote_type(&self) -> QuoteType {
        self.quote_type
    }

    pub fn amount(&self) -> QuoteAmount {
        self.amount
    }
}

/// Profile-less quote request, sent as the body of `GET v1/quotes`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporaryQuoteRequest {
    source: String,
    target: String,
    rate_type: RateType,
    #[serde(flatten)]
    amount: QuoteAmount,
}

impl TemporaryQuoteRequest {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        target_amount: Option<Decimal>,
        source_amount: Option<Decimal>,
    ) -> Result<Self> {
        let amount = QuoteAmount::resolve(target_amount, source_amount)?;
        Ok(Self {
            source: source.into(),
            target: target.into(),
            rate_type: RateType::Fixed,
            amount,
        })
    }
}

/// Identity document fields supplied by the caller
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationDocument {
    pub document_type: DocumentType,
    pub unique_identifier: String,
    pub issue_date: CalendarDate,
    pub issuer_country: String,
    pub issuer_state: String,
    /// `None` for documents that never expire
    pub expiry_date: Option<CalendarDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VerificationDocumentPayload<'a> {
    first_name: &'a str,
    last_name: &'a str,
    #[serde(rename = "type")]
    document_type: DocumentType,
    unique_identifier: &'a str,
    issue_date: CalendarDate,
    issuer_country: &'a str,
    issuer_state: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    expiry_date: Option<CalendarDate>,
}

impl<'a> VerificationDocumentPayload<'a> {
    pub(crate) fn new(person: &'a Person, document: &'a VerificationDocument) -> Self {
        Self {
            first_name: &person.details.first_name,
            last_name: &person.details.last_name,
            document_type: document.document_type,
            unique_identifier: &document.unique_identifier,
            issue_date: document.issue_date,
            issuer_country: &document.issuer_country,
            issuer_state: &document.issuer_state,
            expiry_date: document.expiry_date,
        }
    }
}
