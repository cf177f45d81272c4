//! Built-in organization pools.

use hub_core::{Organization, OrganizationDirectory};

/// (name, type, address, area, governorate)
type OrganizationRow = (&'static str, &'static str, &'static str, &'static str, &'static str);

pub const GENERAL_ORGANIZATIONS: &[OrganizationRow] = &[
    (
        "Resala Charity Organization",
        "Charity",
        "12 El Tahrir St",
        "Dokki",
        "Giza",
    ),
    (
        "Misr El Kheir Foundation",
        "Non-profit",
        "34 Mohamed Farid St",
        "Downtown",
        "Cairo",
    ),
    (
        "Egyptian Food Bank",
        "Food Bank",
        "47 Ring Road",
        "Nasr City",
        "Cairo",
    ),
    (
        "Al Orman Association",
        "Charity",
        "9 Gamaet El Dewal St",
        "Mohandessin",
        "Giza",
    ),
    (
        "Sidi Gaber Orphanage",
        "Orphanage",
        "21 Port Said St",
        "Sidi Gaber",
        "Alexandria",
    ),
    (
        "Dar Al Oloum School",
        "School",
        "5 Abu El Feda St",
        "Zamalek",
        "Cairo",
    ),
    (
        "St. Mark's Community Center",
        "Church",
        "3 Cleopatra St",
        "Cleopatra",
        "Alexandria",
    ),
];

pub const HOSPITALS: &[OrganizationRow] = &[
    (
        "Kasr Al Ainy Hospital",
        "Hospital",
        "Al Saray St",
        "Garden City",
        "Cairo",
    ),
    (
        "Alexandria University Hospital",
        "Hospital",
        "Champollion St",
        "El Azarita",
        "Alexandria",
    ),
    (
        "Ain Shams University Hospital",
        "Hospital",
        "Ramses St",
        "Abbassia",
        "Cairo",
    ),
    (
        "As-Salam International Hospital",
        "Hospital",
        "Corniche El Nil",
        "Maadi",
        "Cairo",
    ),
    (
        "Andalusia Smouha Hospital",
        "Hospital",
        "Victor Emmanuel Sq",
        "Smouha",
        "Alexandria",
    ),
];

fn to_organizations(rows: &[OrganizationRow]) -> Vec<Organization> {
    rows.iter()
        .map(|(name, kind, address, area, governorate)| {
            Organization::new(*name, *kind, *address, *area, *governorate)
        })
        .collect()
}

/// Directory holding the built-in general organizations and hospitals.
pub fn builtin_directory() -> OrganizationDirectory {
    OrganizationDirectory::new(
        to_organizations(GENERAL_ORGANIZATIONS),
        to_organizations(HOSPITALS),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_core::OrganizationPool;

    #[test]
    fn test_builtin_pools() {
        let directory = builtin_directory();
        assert_eq!(
            directory.pool(OrganizationPool::General).len(),
            GENERAL_ORGANIZATIONS.len()
        );
        assert_eq!(
            directory.pool(OrganizationPool::Hospitals).len(),
            HOSPITALS.len()
        );

        for id in directory.pool(OrganizationPool::Hospitals) {
            assert_eq!(directory.get(*id).unwrap().organization_type, "Hospital");
        }
        for id in directory.pool(OrganizationPool::General) {
            assert_ne!(directory.get(*id).unwrap().organization_type, "Hospital");
        }
    }

    #[test]
    fn test_default_organization_is_first_general() {
        let directory = builtin_directory();
        let id = directory.default_organization().unwrap();
        assert_eq!(
            directory.get(id).unwrap().name,
            "Resala Charity Organization"
        );
    }
}
