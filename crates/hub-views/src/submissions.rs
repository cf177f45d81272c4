//! Admin review queue for organization registration requests.

use crate::error::ViewError;
use serde::Serialize;
use tracing::info;

/// A pending request from a representative to register an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizationSubmission {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub email: String,
    pub contact_number: String,
    pub organization_name: String,
    pub organization_type: String,
    pub organization_address: String,
    pub area: String,
    pub governorate: String,
}

/// Outcome of reviewing a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Accepted,
    Rejected,
}

/// A submission removed from the queue and the decision taken on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewedSubmission {
    pub decision: Decision,
    #[serde(flatten)]
    pub submission: OrganizationSubmission,
}

/// Pending organization submissions, reviewed one at a time.
#[derive(Debug, Clone, Default)]
pub struct SubmissionQueue {
    pending: Vec<OrganizationSubmission>,
}

impl SubmissionQueue {
    pub fn new(pending: Vec<OrganizationSubmission>) -> Self {
        Self { pending }
    }

    /// The queue the admin dashboard starts with.
    pub fn seeded() -> Self {
        Self::new(vec![
            OrganizationSubmission {
                first_name: "Karim".to_string(),
                last_name: "Elmeteny".to_string(),
                gender: "Male".to_string(),
                email: "karim@gmail.com".to_string(),
                contact_number: "1234567890".to_string(),
                organization_name: "Organization A".to_string(),
                organization_type: "School".to_string(),
                organization_address: "123 Street".to_string(),
                area: "Sidi Gaber".to_string(),
                governorate: "Alexandria".to_string(),
            },
            OrganizationSubmission {
                first_name: "Yassin".to_string(),
                last_name: "Ahmed".to_string(),
                gender: "Male".to_string(),
                email: "yassin@gmail.com".to_string(),
                contact_number: "9876543210".to_string(),
                organization_name: "Organization B".to_string(),
                organization_type: "Hospital".to_string(),
                organization_address: "456 Street".to_string(),
                area: "Maadi".to_string(),
                governorate: "Cairo".to_string(),
            },
            OrganizationSubmission {
                first_name: "Haneen".to_string(),
                last_name: "Tarek".to_string(),
                gender: "Female".to_string(),
                email: "haneen@gmail.com".to_string(),
                contact_number: "4561237890".to_string(),
                organization_name: "Organization C".to_string(),
                organization_type: "Non-profit".to_string(),
                organization_address: "789 Street".to_string(),
                area: "Zamalek".to_string(),
                governorate: "Cairo".to_string(),
            },
        ])
    }

    pub fn pending(&self) -> &[OrganizationSubmission] {
        &self.pending
    }

    pub fn accept(&mut self, index: usize) -> Result<ReviewedSubmission, ViewError> {
        self.review(index, Decision::Accepted)
    }

    pub fn reject(&mut self, index: usize) -> Result<ReviewedSubmission, ViewError> {
        self.review(index, Decision::Rejected)
    }

    fn review(
        &mut self,
        index: usize,
        decision: Decision,
    ) -> Result<ReviewedSubmission, ViewError> {
        if index >= self.pending.len() {
            return Err(ViewError::SubmissionNotFound(index));
        }
        let submission = self.pending.remove(index);
        info!(
            "Organization request {:?} for '{}'",
            decision, submission.organization_name
        );
        Ok(ReviewedSubmission {
            decision,
            submission,
        })
    }
}
