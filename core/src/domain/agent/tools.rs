use serde::Deserialize;
use serde_json::json;

use crate::domain::{
    agent::entities::{FunctionCall, FunctionDeclaration},
    common::entities::app_errors::CoreError,
};

pub const CALCULATE_BMI: &str = "calculate_bmi";
pub const CREATE_DIET_PLAN: &str = "create_diet_plan";
pub const NUTRITION_FACTS_RETRIEVER: &str = "nutrition_facts_retriever";

/// A tool invocation decoded from the model's function call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "name", content = "args", rename_all = "snake_case")]
pub enum AgentTool {
    CalculateBmi { height_m: f64, weight_kg: f64 },
    CreateDietPlan { calories: u32, dietary_preference: String },
    NutritionFactsRetriever { query: String },
}

impl TryFrom<&FunctionCall> for AgentTool {
    type Error = CoreError;

    fn try_from(call: &FunctionCall) -> Result<Self, Self::Error> {
        serde_json::from_value(json!({ "name": call.name, "args": call.args })).map_err(|e| {
            CoreError::Invalid(format!("unsupported call to tool '{}': {}", call.name, e))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obesity,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::NormalWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obesity
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }
}

pub fn calculate_bmi(height_m: f64, weight_kg: f64) -> Result<String, CoreError> {
    if !(height_m.is_finite() && height_m > 0.0) || !(weight_kg.is_finite() && weight_kg > 0.0) {
        return Err(CoreError::Invalid(
            "height and weight must be positive numbers".to_string(),
        ));
    }

    let bmi = weight_kg / (height_m * height_m);
    let rounded = (bmi * 10.0).round() / 10.0;
    let category = BmiCategory::from_bmi(rounded);

    Ok(format!(
        "The calculated BMI is {:.1}, which is considered '{}'.",
        rounded,
        category.as_str()
    ))
}

pub fn create_diet_plan(calories: u32, dietary_preference: &str) -> String {
    let protein_source = if dietary_preference.trim().eq_ignore_ascii_case("vegetarian") {
        "tofu or lentils"
    } else {
        "chicken breast or fish"
    };

    format!(
        "Here is a basic {calories} calorie diet plan for a '{dietary_preference}' preference:\n\
         - Breakfast (approx. 400 cal): Oatmeal with berries and a handful of nuts.\n\
         - Lunch (approx. 600 cal): Large salad with mixed greens, vegetables, {protein_source}, and a light vinaigrette.\n\
         - Dinner (approx. 600 cal): Grilled {protein_source} with a side of quinoa and steamed broccoli.\n\
         - Snack (approx. 200 cal): Greek yogurt or an apple with peanut butter.\n\
         \n\
         Disclaimer: This is a sample plan. Consult a professional for personalized advice."
    )
}

pub fn tool_declarations() -> Vec<FunctionDeclaration> {
    vec![
        FunctionDeclaration {
            name: CALCULATE_BMI.to_string(),
            description: "Calculates Body Mass Index (BMI) from height in meters and weight in kilograms and returns the BMI with its category.".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "height_m": { "type": "number", "description": "Height in meters" },
                    "weight_kg": { "type": "number", "description": "Weight in kilograms" }
                },
                "required": ["height_m", "weight_kg"]
            }),
        },
        FunctionDeclaration {
            name: CREATE_DIET_PLAN.to_string(),
            description: "Creates a basic one-day diet plan for a daily calorie target and a dietary preference such as 'vegetarian' or 'non-vegetarian'.".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "calories": { "type": "integer", "description": "Daily calorie target" },
                    "dietary_preference": { "type": "string", "description": "Dietary preference" }
                },
                "required": ["calories", "dietary_preference"]
            }),
        },
        FunctionDeclaration {
            name: NUTRITION_FACTS_RETRIEVER.to_string(),
            description: "Searches and returns information about general nutrition, diet principles, hydration, and calories.".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "query": { "type": "string", "description": "What to look up" }
                },
                "required": ["query"]
            }),
        },
    ]
}
