/*
[INPUT]:  Profile ids and personal/business profile requests
[OUTPUT]: Generic profiles and typed person/business views
[POS]:    HTTP layer - profile endpoints
[UPDATE]: When adding new profile endpoints or changing request shapes
*/

use crate::http::{Result, TransferwiseClient};
use crate::types::{
    Business, BusinessProfileRequest, Person, PersonalProfileRequest, Profile, ProfileRequest,
};
use reqwest::Method;

const PROFILES_PATH: &str = "v1/profiles";

impl TransferwiseClient {
    /// List profiles of the authenticated user
    ///
    /// GET v1/profiles
    pub async fn profiles(&self) -> Result<Vec<Profile>> {
        self.get_json(PROFILES_PATH).await
    }

    /// Get a single profile
    ///
    /// GET v1/profiles/{id}
    pub async fn profile(&self, id: i64) -> Result<Profile> {
        self.get_json(&format!("{PROFILES_PATH}/{id}")).await
    }

    /// Create a personal or business profile
    ///
    /// POST v1/profiles
    pub async fn create_profile(&self, request: impl Into<ProfileRequest>) -> Result<Profile> {
        let request = request.into();
        self.execute(Method::POST, PROFILES_PATH, Some(&request), &[])
            .await
    }

    /// Update a personal or business profile
    ///
    /// PUT v1/profiles
    pub async fn update_profile(&self, request: impl Into<ProfileRequest>) -> Result<Profile> {
        let request = request.into();
        self.execute(Method::PUT, PROFILES_PATH, Some(&request), &[])
            .await
    }

    /// Create a personal profile; fails if the API answers with another kind
    ///
    /// POST v1/profiles
    pub async fn create_personal_profile(&self, request: PersonalProfileRequest) -> Result<Person> {
        self.create_profile(request).await?.try_into_person()
    }

    /// Create a business profile; fails if the API answers with another kind
    ///
    /// POST v1/profiles
    pub async fn create_business_profile(
        &self,
        request: BusinessProfileRequest,
    ) -> Result<Business> {
        self.create_profile(request).await?.try_into_business()
    }

    /// Update a personal profile
    ///
    /// PUT v1/profiles
    pub async fn update_personal_profile(&self, request: PersonalProfileRequest) -> Result<Person> {
        self.update_profile(request).await?.try_into_person()
    }

    /// Update a business profile
    ///
    /// PUT v1/profiles
    pub async fn update_business_profile(
        &self,
        request: BusinessProfileRequest,
    ) -> Result<Business> {
        self.update_profile(request).await?.try_into_business()
    }

    /// Get a profile that must be personal
    ///
    /// GET v1/profiles/{id}
    pub async fn person(&self, id: i64) -> Result<Person> {
        self.profile(id).await?.try_into_person()
    }

    /// Get a profile that must be a business
    ///
    /// GET v1/profiles/{id}
    pub async fn business(&self, id: i64) -> Result<Business> {
        self.profile(id).await?.try_into_business()
    }
}
