//! Donor persona generator.
//!
//! Names, emails and phone numbers are combined from small tables, so many
//! personas share a name but emails and phones rarely collide.

use super::pick;
use hub_core::Person;
use rand::Rng;

pub const FIRST_NAMES: &[&str] = &[
    "Ahmed", "Mohamed", "Mona", "Sara", "Karim", "Yassin", "Haneen", "Omar", "Nour", "Layla",
    "Youssef", "Mariam", "Ali", "Hana", "Tarek", "Salma",
];

pub const LAST_NAMES: &[&str] = &[
    "Hassan", "Ahmed", "Elmeteny", "Tarek", "Mostafa", "Ibrahim", "Saleh", "Fathy", "Adel",
    "Nabil", "Farouk", "Kamal",
];

pub const EMAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "outlook.com", "hotmail.com"];

/// Mobile operator prefixes; every phone number is `01` + prefix + 8 digits.
pub const PHONE_PREFIXES: &[&str] = &["0", "1", "2", "5"];

/// Generate a random person with matching email.
pub fn generate_person<R: Rng + ?Sized>(rng: &mut R) -> Person {
    let first_name = pick(rng, FIRST_NAMES);
    let last_name = pick(rng, LAST_NAMES);
    let email = format!(
        "{}.{}{}@{}",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        rng.random_range(1..100),
        pick(rng, EMAIL_DOMAINS)
    );
    let phone = format!(
        "01{}{:08}",
        pick(rng, PHONE_PREFIXES),
        rng.random_range(0..100_000_000u32)
    );

    Person {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email,
        phone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_person_fields() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let person = generate_person(&mut rng);
            assert!(FIRST_NAMES.contains(&person.first_name.as_str()));
            assert!(LAST_NAMES.contains(&person.last_name.as_str()));

            let (local, domain) = person.email.split_once('@').unwrap();
            assert!(EMAIL_DOMAINS.contains(&domain));
            assert!(local.starts_with(&format!(
                "{}.{}",
                person.first_name.to_lowercase(),
                person.last_name.to_lowercase()
            )));

            assert_eq!(person.phone.len(), 11);
            assert!(person.phone.starts_with("01"));
            assert!(PHONE_PREFIXES.contains(&&person.phone[2..3]));
            assert!(person.phone.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
