//! Medical supplies generator.

use super::pick;
use hub_core::{MedicalSuppliesItem, MedicalSupply};
use rand::Rng;

pub const DEVICE_TYPES: &[&str] = &[
    "Thermometer",
    "Blood Pressure Monitor",
    "Glucose Meter",
    "Pulse Oximeter",
    "Nebulizer",
];

pub const EQUIPMENT_TYPES: &[&str] = &[
    "Wheelchair",
    "Hospital Bed",
    "Crutches",
    "Walker",
    "Oxygen Cylinder",
];

pub const MEDICATION_TYPES: &[&str] = &[
    "Antibiotics",
    "Painkillers",
    "Insulin",
    "Antihistamines",
    "Vitamins",
];

pub const MEDICAL_USES: &[&str] = &[
    "Use: Emergency care",
    "Use: Post-operative recovery",
    "Use: Chronic disease management",
    "Use: Pediatric ward",
    "Use: Intensive care unit",
];

/// Generate a random medical supplies request.
///
/// The supply kind is drawn first, then the type attribute for that kind.
pub fn generate_medical_supplies_item<R: Rng + ?Sized>(rng: &mut R) -> MedicalSuppliesItem {
    let supply = match rng.random_range(0..3) {
        0 => MedicalSupply::Device {
            device_type: pick(rng, DEVICE_TYPES).to_string(),
        },
        1 => MedicalSupply::Equipment {
            equipment_type: pick(rng, EQUIPMENT_TYPES).to_string(),
        },
        _ => MedicalSupply::Medication {
            medication_type: pick(rng, MEDICATION_TYPES).to_string(),
        },
    };

    MedicalSuppliesItem {
        supply,
        usage: pick(rng, MEDICAL_USES).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_medical_attributes_in_declared_sets() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 3];

        for _ in 0..300 {
            let item = generate_medical_supplies_item(&mut rng);
            assert!(MEDICAL_USES.contains(&item.usage.as_str()));
            match &item.supply {
                MedicalSupply::Device { device_type } => {
                    seen[0] = true;
                    assert!(DEVICE_TYPES.contains(&device_type.as_str()));
                }
                MedicalSupply::Equipment { equipment_type } => {
                    seen[1] = true;
                    assert!(EQUIPMENT_TYPES.contains(&equipment_type.as_str()));
                }
                MedicalSupply::Medication { medication_type } => {
                    seen[2] = true;
                    assert!(MEDICATION_TYPES.contains(&medication_type.as_str()));
                }
            }
        }

        assert_eq!(
            seen,
            [true; 3],
            "every supply kind should appear in 300 draws"
        );
    }
}
