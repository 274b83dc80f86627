use crate::domain::{product::entities::ProductRecord, session::entities::UserProfile};

pub const GENERAL_HEALTHY_EATING: &str = "General Healthy Eating";

pub const CONSULTANT_SYSTEM_INSTRUCTION: &str = r#"
You are a Senior Clinical Nutritionist Agent.
You will receive:
1. A Product Name.
2. An Ingredients List (found by the Orchestrator).
3. A User's Health Condition.
4. A context snippet from the "OpenNutrition Local Database".

CRITICAL SAFETY PROTOCOL:
- You are an AI assistant, NOT a medical doctor.
- If the User's Condition is life-threatening or complex (e.g., Severe Allergies, Kidney Failure, Cancer, Heart Failure), you MUST output 'CAUTION' or 'AVOID' and explicitly state in the summary: "Please consult your physician before consuming this. This AI cannot guarantee safety for severe medical conditions."
- If ingredients are missing or vague (e.g., "Spices", "Natural Flavors") and the condition is sensitive (e.g., Allergies, Celiac), assume the worst and warn the user.
- If the inquiry condition and the user profile disagree on safety, the stricter verdict wins and the summary must explain the conflict.
- Prioritize SAFETY over permission.

Your goal is to provide a safety assessment based strictly on the ingredients and the disease.
Output MUST be valid JSON adhering to this schema:
{
  "verdict": "SAFE" | "CAUTION" | "AVOID",
  "summary": "A concise, professional medical explanation (max 2 sentences). Include disclaimers if necessary.",
  "keyConcerns": ["List of specific ingredients that are problematic"],
  "alternatives": [
    { "name": "Alternative Product Name", "reason": "Why it is better" }
  ]
}
"#;

pub const NUTRITION_REFERENCE: &str = r#"
# OpenNutrition Local Database

## Disease: High Blood Pressure (Hypertension)
- **Warning Ingredients:** Sodium (Salt), Licorice, Caffeine (in high amounts), Saturated Fats, Trans Fats.
- **Sodium Limit:** >140mg per serving is considered "moderate", >400mg is "high".
- **Recommended:** Potassium-rich foods, magnesium, fiber, whole grains, fruits, vegetables.

## Disease: Diabetes (Type 2)
- **Warning Ingredients:** Added Sugars (Sucrose, High Fructose Corn Syrup), Refined Flours, White Rice.
- **Glycemic Index:** Avoid High GI foods.
- **Recommended:** Complex carbohydrates, fiber, lean proteins, healthy fats.

## Disease: Celiac Disease
- **Warning Ingredients:** Wheat, Barley, Rye, Triticale, Malt, Brewer's Yeast.
- **Hidden Sources:** Soy sauce (often contains wheat), modified food starch.
- **Recommended:** Gluten-free grains (Quinoa, Rice, Corn), potato, tapioca.

## Disease: High Cholesterol
- **Warning Ingredients:** Saturated Fats (Palm oil, Butter), Trans Fats (Partially hydrogenated oils), Dietary Cholesterol.
- **Recommended:** Soluble fiber (Oats), Sterols/Stanols, Omega-3 fatty acids.

## Disease: GERD / Acid Reflux
- **Warning Ingredients:** Caffeine, Chocolate, Peppermint, Tomatoes, Citrus, Spicy foods.
- **Recommended:** Ginger, Oatmeal, Non-citrus fruits, Egg whites.
"#;

/// Inquiry condition, else the profile's declared conditions, else the
/// generic default.
pub fn effective_condition(inquiry_condition: Option<&str>, profile: Option<&UserProfile>) -> String {
    inquiry_condition
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .or_else(|| {
            profile
                .map(|p| p.conditions.trim())
                .filter(|c| !c.is_empty())
        })
        .unwrap_or(GENERAL_HEALTHY_EATING)
        .to_string()
}

fn profile_block(profile: &UserProfile) -> String {
    format!(
        "USER PROFILE:\n- Name: {}\n- Known Conditions: {}\n- Health Goals: {}\n- Lifestyle/Diet: {}\n",
        profile.name, profile.conditions, profile.goals, profile.lifestyle
    )
}

pub fn build_consultation_prompt(
    product: &ProductRecord,
    inquiry_condition: Option<&str>,
    profile: Option<&UserProfile>,
) -> String {
    let condition = effective_condition(inquiry_condition, profile);
    let profile_context = profile.map(profile_block).unwrap_or_default();

    format!(
        r#"
Product: {name}
Ingredients: {ingredients}

Specific Inquiry Condition: {condition}

{profile_context}
INSTRUCTIONS:
1. Evaluate the product ingredients against the "Specific Inquiry Condition".
2. IF a "USER PROFILE" is provided, ALSO check against the User's Conditions, Goals, and Lifestyle.
3. If there is a conflict (e.g. Safe for Inquiry but Bad for Profile), set verdict to CAUTION or AVOID and explain why.

Information from Local Database:
{reference}
"#,
        name = product.name,
        ingredients = product.ingredients,
        condition = condition,
        profile_context = profile_context,
        reference = NUTRITION_REFERENCE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::entities::ProductSource;

    fn product() -> ProductRecord {
        ProductRecord {
            name: "Peanut Butter Cups".into(),
            brand: None,
            ingredients: "Milk chocolate, peanuts, sugar, dextrose, salt".into(),
            image_url: None,
            source: ProductSource::Catalog,
            nutri_score: None,
            nutrient_levels: None,
        }
    }

    fn profile(conditions: &str) -> UserProfile {
        UserProfile {
            name: "Sam".into(),
            conditions: conditions.into(),
            goals: "Reduce sugar".into(),
            lifestyle: "Vegetarian".into(),
        }
    }

    #[test]
    fn test_effective_condition_precedence() {
        let p = profile("Hypertension");
        assert_eq!(effective_condition(Some("celiac"), Some(&p)), "celiac");
        assert_eq!(effective_condition(None, Some(&p)), "Hypertension");
        assert_eq!(effective_condition(Some("  "), Some(&p)), "Hypertension");
        assert_eq!(effective_condition(None, Some(&profile(""))), GENERAL_HEALTHY_EATING);
        assert_eq!(effective_condition(None, None), GENERAL_HEALTHY_EATING);
    }

    #[test]
    fn test_prompt_carries_ingredients_and_reference_verbatim() {
        let prompt = build_consultation_prompt(&product(), Some("severe peanut allergy"), None);

        assert!(prompt.contains("Product: Peanut Butter Cups"));
        assert!(prompt.contains("Ingredients: Milk chocolate, peanuts, sugar, dextrose, salt"));
        assert!(prompt.contains("Specific Inquiry Condition: severe peanut allergy"));
        assert!(prompt.contains("## Disease: Celiac Disease"));
        assert!(!prompt.contains("USER PROFILE:"));
    }

    #[test]
    fn test_prompt_includes_profile_block_when_present() {
        let p = profile("Type 2 Diabetes");
        let prompt = build_consultation_prompt(&product(), None, Some(&p));

        assert!(prompt.contains("Specific Inquiry Condition: Type 2 Diabetes"));
        assert!(prompt.contains("- Name: Sam"));
        assert!(prompt.contains("- Health Goals: Reduce sugar"));
        assert!(prompt.contains("- Lifestyle/Diet: Vegetarian"));
    }

    #[test]
    fn test_safety_protocol_is_in_system_instruction() {
        assert!(CONSULTANT_SYSTEM_INSTRUCTION.contains("MUST output 'CAUTION' or 'AVOID'"));
        assert!(CONSULTANT_SYSTEM_INSTRUCTION.contains("Please consult your physician"));
        assert!(CONSULTANT_SYSTEM_INSTRUCTION.contains("stricter verdict wins"));
    }
}
