//! Intern roster and support group models

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::credentials;

/// A peer-support group interns can be assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportGroup {
    pub id: u32,
    pub name: String,
}

/// The mock groups the doctor dashboard assigns interns to
pub fn default_groups() -> Vec<SupportGroup> {
    [
        (1, "Anxiety Support Circle"),
        (2, "Depression Support"),
        (3, "School Buddies"),
    ]
    .into_iter()
    .map(|(id, name)| SupportGroup {
        id,
        name: name.to_string(),
    })
    .collect()
}

/// An intern account with generated placeholder credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternAccount {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub group: Option<u32>,
    pub duration_weeks: u32,
    pub created_at: DateTime<Utc>,
}

impl InternAccount {
    /// Expiry as the dashboard displays it ("3 weeks"). Not enforced anywhere.
    pub fn expires(&self) -> String {
        format!("{} weeks", self.duration_weeks)
    }
}

/// In-memory intern roster. Nothing here is persisted or authenticated; the
/// roster exists for the session, as in the original dashboard.
#[derive(Debug, Clone, Default)]
pub struct InternRoster {
    interns: Vec<InternAccount>,
}

impl InternRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an intern, generating a username and password for them
    pub fn add_intern<R: Rng>(
        &mut self,
        rng: &mut R,
        name: &str,
        email: &str,
        group: Option<u32>,
        duration_weeks: u32,
    ) -> &InternAccount {
        let account = InternAccount {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            username: credentials::generate_username(rng),
            password: credentials::generate_password(rng),
            group,
            duration_weeks,
            created_at: Utc::now(),
        };
        self.interns.push(account);
        self.interns.last().expect("just pushed")
    }

    /// Regenerate the credentials of one intern in place
    pub fn rotate_credentials<R: Rng>(&mut self, rng: &mut R, id: Uuid) -> Option<&InternAccount> {
        let account = self.interns.iter_mut().find(|i| i.id == id)?;
        account.username = credentials::generate_username(rng);
        account.password = credentials::generate_password(rng);
        Some(account)
    }

    pub fn find_by_username(&self, username: &str) -> Option<&InternAccount> {
        self.interns.iter().find(|i| i.username == username)
    }

    pub fn interns(&self) -> &[InternAccount] {
        &self.interns
    }
}
