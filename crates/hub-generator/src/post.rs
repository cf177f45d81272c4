//! Post synthesis: item payload plus templated title and details.

use crate::generators::generate_item;
use hub_core::{
    BloodDonationItem, Category, ClothItem, FoodItem, MedicalSuppliesItem, Organization,
    OrganizationId, Post, PostId, PostItem, ToyItem,
};
use rand::Rng;

/// Build a post of `category` for the given organization.
///
/// The caller picks the organization from the pool returned by
/// [`Category::organization_pool`].
pub fn synthesize_post<R: Rng + ?Sized>(
    id: PostId,
    category: Category,
    organization_id: OrganizationId,
    organization: &Organization,
    rng: &mut R,
) -> Post {
    let item = generate_item(category, organization, rng);
    let (title, details) = render(&item, organization);
    Post::new(id, organization_id, title, details, item)
}

fn render(item: &PostItem, organization: &Organization) -> (String, String) {
    match item {
        PostItem::Toys(toy) => render_toys(toy, organization),
        PostItem::Clothes(cloth) => render_clothes(cloth, organization),
        PostItem::MedicalSupplies(supplies) => render_medical_supplies(supplies),
        PostItem::BloodDonation(blood) => render_blood_donation(blood, organization),
        PostItem::Food(food) => render_food(food, organization),
    }
}

fn visit_line(organization: &Organization) -> String {
    format!(
        "To donate, please visit {} at {}, {}. Our staff will guide you through the donation process.",
        organization.name, organization.address, organization.area
    )
}

fn render_toys(item: &ToyItem, organization: &Organization) -> (String, String) {
    let title = format!("Toys Needed for Children in {}", organization.name);
    let details = format!(
        "Our organization, {name}, is in need of toys for the children under our care. \
We are looking for donations of the following items:
- Category: {category}
- Age Range: {age_range}
- Suitable for: {gender}
- Quantity: {quantity}
- Type: {toy_type}

Your generous donations will help us provide essential toys to the children in our care. \
If you have items that fit the above description and are in good condition, please consider donating.

{visit}

We appreciate your support in this critical situation. \
Your donation can make a significant difference in someone's life. Thank you.",
        name = organization.name,
        category = item.category,
        age_range = item.age_range,
        gender = item.toy_gender,
        quantity = item.quantity,
        toy_type = item.toy_type,
        visit = visit_line(organization),
    );
    (title, details)
}

fn render_clothes(item: &ClothItem, organization: &Organization) -> (String, String) {
    let title = format!("Clothes Needed for {}", organization.name);
    let details = format!(
        "With changing seasons, our organization, {name}, is currently in need of clothing donations \
to keep those in need warm and comfortable. We are specifically looking for the following:

- Category: {cloth_type}
- Material: {material}
- Season: {season}
- Gender: {gender}
- Age Group: {age_range}
- Quantity: {quantity}

Your generous donations will help us provide essential clothing items to those in need in our community. \
If you have items that fit the above description and are in good condition, please consider donating.

{visit}

We appreciate your support in this critical situation. \
Your donation can make a significant difference in someone's life. Thank you.",
        name = organization.name,
        cloth_type = item.cloth_type,
        material = item.material,
        season = item.season,
        gender = item.gender,
        age_range = item.age_range,
        quantity = item.quantity,
        visit = visit_line(organization),
    );
    (title, details)
}

fn render_medical_supplies(item: &MedicalSuppliesItem) -> (String, String) {
    let title = "Medical Supplies Needed".to_string();
    let details = format!(
        "Our hospital is in urgent need of medical supplies. \
We are looking for donations of the following items:
- Category: {category}
- {supply}
- {usage}

Your generous donations will help us provide better care to our patients. Thank you for your support.",
        category = item.supply.category_name(),
        supply = item.supply,
        usage = item.usage,
    );
    (title, details)
}

fn render_blood_donation(
    item: &BloodDonationItem,
    organization: &Organization,
) -> (String, String) {
    let title = format!("Blood Donation for {}", item.patient_name);
    let details = format!(
        "Patient {patient}, has been admitted to {name} in {area}, {governorate}. \
He has been diagnosed with a severe condition that requires immediate blood transfusion. \
The patient's blood type is {blood_type}, and we urgently need donors of the same blood type ({blood_type}).

The patient's condition is critical, and the required blood type {blood_type} is not available \
in the blood bank of our hospital. We are therefore reaching out to the community for help.

If you are a healthy individual aged between 18 and 65, and your blood type is {blood_type}, \
we kindly request you to consider donating blood for this cause. \
Your donation can make a significant difference and potentially save a life.

Please remember, before donating, you should have a good night's sleep, \
have eaten in the last four hours, and be well hydrated.

To donate, please visit {name} at {address}. Our staff will guide you through the process.

We appreciate your support in this critical situation. \
Your donation can give someone another chance at life. Thank you.",
        patient = item.patient_name,
        name = organization.name,
        area = organization.area,
        governorate = organization.governorate,
        blood_type = item.blood_type,
        address = organization.address,
    );
    (title, details)
}

fn render_food(item: &FoodItem, organization: &Organization) -> (String, String) {
    let title = format!("Food Needed for {}", organization.name);
    let details = format!(
        "Our organization, {name}, is in urgent need of food donations to support families in need.
We are looking for donations of non-perishable food items such as:
- Category: {category}
{amount}

Your generous donations will help us provide essential food items to those in need in our community.

{visit}
Thank you for your support.
",
        name = organization.name,
        category = item.category,
        amount = item.amount,
        visit = visit_line(organization),
    );
    (title, details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_core::{FoodAmount, MedicalSupply};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn shelter() -> Organization {
        Organization::new("Shelter", "Charity", "1 Nile St", "Zamalek", "Cairo")
    }

    fn hospital() -> Organization {
        Organization::new(
            "City Hospital",
            "Hospital",
            "2 Port St",
            "Smouha",
            "Alexandria",
        )
    }

    #[test]
    fn test_synthesized_post_is_unfulfilled_and_matches_category() {
        let mut rng = StdRng::seed_from_u64(42);
        for (idx, category) in Category::ALL.into_iter().enumerate() {
            let post = synthesize_post(
                PostId(idx as u32 + 1),
                category,
                OrganizationId(3),
                &hospital(),
                &mut rng,
            );
            assert_eq!(post.id, PostId(idx as u32 + 1));
            assert_eq!(post.category(), category);
            assert_eq!(post.organization, OrganizationId(3));
            assert!(!post.is_fulfilled());
            assert!(post.donations().is_empty());
        }
    }

    #[test]
    fn test_toy_template_substitutes_fields() {
        let item = ToyItem {
            category: "Dolls".to_string(),
            age_range: "3-5".to_string(),
            toy_gender: "Girls".to_string(),
            quantity: 12,
            toy_type: "Doll".to_string(),
        };
        let (title, details) = render(&PostItem::Toys(item), &shelter());

        assert_eq!(title, "Toys Needed for Children in Shelter");
        assert!(details.starts_with("Our organization, Shelter, is in need of toys"));
        assert!(details.contains("- Age Range: 3-5\n"));
        assert!(details.contains("- Quantity: 12\n"));
        assert!(details.contains("please visit Shelter at 1 Nile St, Zamalek."));
    }

    #[test]
    fn test_medical_template_uses_supply_kind_line() {
        let item = MedicalSuppliesItem {
            supply: MedicalSupply::Equipment {
                equipment_type: "Wheelchair".to_string(),
            },
            usage: "Use: Pediatric ward".to_string(),
        };
        let (title, details) = render(&PostItem::MedicalSupplies(item), &hospital());

        assert_eq!(title, "Medical Supplies Needed");
        assert!(details.contains("- Category: Medical Equipment\n- Equipment Type: Wheelchair\n"));
        assert!(details.contains("- Use: Pediatric ward"));
    }

    #[test]
    fn test_blood_template_names_patient_and_hospital() {
        let item = BloodDonationItem {
            patient_name: "Omar Saleh".to_string(),
            blood_type: "O-".to_string(),
            hospital: "City Hospital".to_string(),
            area: "Smouha".to_string(),
            governorate: "Alexandria".to_string(),
        };
        let (title, details) = render(&PostItem::BloodDonation(item), &hospital());

        assert_eq!(title, "Blood Donation for Omar Saleh");
        assert!(details.starts_with(
            "Patient Omar Saleh, has been admitted to City Hospital in Smouha, Alexandria."
        ));
        assert!(details.contains(
            "Alexandria. He has been diagnosed with a severe condition that requires immediate"
        ));
        assert!(details.contains("same blood type (O-)"));
        assert!(details.contains("please visit City Hospital at 2 Port St."));
    }

    #[test]
    fn test_food_template_weight_and_quantity() {
        let by_weight = FoodItem {
            category: "Rice".to_string(),
            amount: FoodAmount::Weight(25),
        };
        let (title, details) = render(&PostItem::Food(by_weight), &shelter());
        assert_eq!(title, "Food Needed for Shelter");
        assert!(details.contains("- Category: Rice\nWeight: 25 Kg\n"));

        let by_count = FoodItem {
            category: "Cereal".to_string(),
            amount: FoodAmount::Quantity(8),
        };
        let (_, details) = render(&PostItem::Food(by_count), &shelter());
        assert!(details.contains("- Category: Cereal\nQuantity: 8\n"));
    }

    #[test]
    fn test_clothes_template() {
        let item = ClothItem {
            cloth_type: "Sweater".to_string(),
            material: "Wool".to_string(),
            season: "Winter".to_string(),
            gender: "Unisex".to_string(),
            age_range: "Child".to_string(),
            quantity: 30,
        };
        let (title, details) = render(&PostItem::Clothes(item), &shelter());
        assert_eq!(title, "Clothes Needed for Shelter");
        assert!(details.contains("- Material: Wool\n- Season: Winter\n"));
        assert!(details.contains("- Age Group: Child\n"));
    }
}
