//! Blood donation request generator.

use super::person::generate_person;
use super::pick;
use hub_core::{BloodDonationItem, Organization};
use rand::Rng;

pub const BLOOD_TYPES: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

/// Generate a blood donation request for a patient admitted to `hospital`.
pub fn generate_blood_donation_item<R: Rng + ?Sized>(
    hospital: &Organization,
    rng: &mut R,
) -> BloodDonationItem {
    let patient = generate_person(rng);
    BloodDonationItem {
        patient_name: patient.full_name(),
        blood_type: pick(rng, BLOOD_TYPES).to_string(),
        hospital: hospital.name.clone(),
        area: hospital.area.clone(),
        governorate: hospital.governorate.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_blood_item_copies_hospital_location() {
        let mut rng = StdRng::seed_from_u64(3);
        let hospital = Organization::new(
            "Kasr Al Ainy Hospital",
            "Hospital",
            "Al Saray St",
            "Garden City",
            "Cairo",
        );

        for _ in 0..50 {
            let item = generate_blood_donation_item(&hospital, &mut rng);
            assert!(BLOOD_TYPES.contains(&item.blood_type.as_str()));
            assert_eq!(item.hospital, "Kasr Al Ainy Hospital");
            assert_eq!(item.area, "Garden City");
            assert_eq!(item.governorate, "Cairo");
            assert!(item.patient_name.contains(' '));
        }
    }
}
