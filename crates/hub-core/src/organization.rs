//! Organizations and the two disjoint pools they are sampled from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of an organization inside an [`OrganizationDirectory`].
///
/// Two posts belong to the same organization iff their ids are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizationId(pub u32);

impl fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which pool an organization belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationPool {
    /// Charities, schools, shelters and other non-hospital organizations.
    General,
    /// Hospitals; the only source of blood and medical supply requests.
    Hospitals,
}

/// An organization that publishes donation posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    #[serde(rename = "type")]
    pub organization_type: String,
    pub address: String,
    pub area: String,
    pub governorate: String,
}

impl Organization {
    pub fn new(
        name: impl Into<String>,
        organization_type: impl Into<String>,
        address: impl Into<String>,
        area: impl Into<String>,
        governorate: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            organization_type: organization_type.into(),
            address: address.into(),
            area: area.into(),
            governorate: governorate.into(),
        }
    }
}

/// Serialized form of a directory entry, used by exporters.
#[derive(Debug, Clone, Serialize)]
pub struct OrganizationEntry<'a> {
    pub id: OrganizationId,
    pub pool: OrganizationPool,
    #[serde(flatten)]
    pub organization: &'a Organization,
}

/// All known organizations, split into the general and hospital pools.
///
/// Organizations are immutable once the directory is built. Ids are assigned
/// in insertion order: general organizations first, then hospitals.
#[derive(Debug, Clone, Default)]
pub struct OrganizationDirectory {
    organizations: Vec<(OrganizationPool, Organization)>,
    general: Vec<OrganizationId>,
    hospitals: Vec<OrganizationId>,
}

impl OrganizationDirectory {
    /// Build a directory from the two pools.
    pub fn new(general: Vec<Organization>, hospitals: Vec<Organization>) -> Self {
        let mut directory = Self::default();
        for organization in general {
            directory.push(OrganizationPool::General, organization);
        }
        for organization in hospitals {
            directory.push(OrganizationPool::Hospitals, organization);
        }
        directory
    }

    fn push(&mut self, pool: OrganizationPool, organization: Organization) {
        let id = OrganizationId(self.organizations.len() as u32);
        self.organizations.push((pool, organization));
        match pool {
            OrganizationPool::General => self.general.push(id),
            OrganizationPool::Hospitals => self.hospitals.push(id),
        }
    }

    /// Look up an organization by id.
    pub fn get(&self, id: OrganizationId) -> Option<&Organization> {
        self.organizations.get(id.0 as usize).map(|(_, org)| org)
    }

    /// The pool an organization was registered in.
    pub fn pool_of(&self, id: OrganizationId) -> Option<OrganizationPool> {
        self.organizations.get(id.0 as usize).map(|(pool, _)| *pool)
    }

    /// Ids of every organization in the given pool, in insertion order.
    pub fn pool(&self, pool: OrganizationPool) -> &[OrganizationId] {
        match pool {
            OrganizationPool::General => &self.general,
            OrganizationPool::Hospitals => &self.hospitals,
        }
    }

    /// Find an organization by exact name.
    pub fn find_by_name(&self, name: &str) -> Option<OrganizationId> {
        self.organizations
            .iter()
            .position(|(_, org)| org.name == name)
            .map(|idx| OrganizationId(idx as u32))
    }

    /// The first general organization; the representative dashboard's
    /// organization unless configured otherwise.
    pub fn default_organization(&self) -> Option<OrganizationId> {
        self.general.first().copied()
    }

    pub fn len(&self) -> usize {
        self.organizations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.organizations.is_empty()
    }

    /// Iterate over every organization with its id and pool.
    pub fn entries(&self) -> impl Iterator<Item = OrganizationEntry<'_>> {
        self.organizations
            .iter()
            .enumerate()
            .map(|(idx, (pool, organization))| OrganizationEntry {
                id: OrganizationId(idx as u32),
                pool: *pool,
                organization,
            })
    }
}
