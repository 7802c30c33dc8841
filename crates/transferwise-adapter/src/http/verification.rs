/*
[INPUT]:  Person profile and identity document fields
[OUTPUT]: Submitted verification document
[POS]:    HTTP layer - verification document endpoint
[UPDATE]: When the document payload or endpoint changes
*/

use crate::http::{Result, TransferwiseClient, TransferwiseError};
use crate::types::requests::VerificationDocumentPayload;
use crate::types::{Person, VerificationDocument};
use reqwest::Method;

impl TransferwiseClient {
    /// Submit an identity document for a personal profile.
    ///
    /// Holder names come from the profile. The expiry date is left out of the
    /// payload when the document has none.
    ///
    /// POST v1/profiles/{id}/verification-documents
    pub async fn submit_verification_document(
        &self,
        person: &Person,
        document: &VerificationDocument,
    ) -> Result<()> {
        let id = person.id.ok_or_else(|| {
            TransferwiseError::Validation("person profile has no id".to_string())
        })?;
        let payload = VerificationDocumentPayload::new(person, document);
        let path = format!("v1/profiles/{id}/verification-documents");
        self.execute_no_content(Method::POST, &path, Some(&payload), &[])
            .await
    }
}
