use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::ApiError;
use crate::recipes::repo::{NewRecipe, Recipe};

/// Request body for recipe creation. Every field is optional at the serde
/// layer so a missing required field surfaces as a 400 from our own
/// validation, not as a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub prep_time_minutes: Option<i32>,
    #[serde(default)]
    pub cook_time_minutes: Option<i32>,
    #[serde(default)]
    pub servings: Option<i32>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CreateRecipeRequest {
    /// Check required fields and value ranges, normalising free text.
    /// Mirrors the client-side form check; the server copy is authoritative.
    pub fn validate(self) -> Result<NewRecipe, ApiError> {
        let title = require_text(self.title, "Title is required")?;
        let instructions = require_text(self.instructions, "Instructions are required")?;

        check_non_negative(self.prep_time_minutes, "prepTimeMinutes")?;
        check_non_negative(self.cook_time_minutes, "cookTimeMinutes")?;
        check_non_negative(self.servings, "servings")?;

        let image_url = optional_text(self.image_url);
        if let Some(url) = &image_url {
            if !is_valid_http_url(url) {
                return Err(ApiError::bad_request("imageUrl must be an http(s) URL"));
            }
        }

        Ok(NewRecipe {
            title,
            description: optional_text(self.description),
            instructions,
            prep_time_minutes: self.prep_time_minutes,
            cook_time_minutes: self.cook_time_minutes,
            servings: self.servings,
            category: optional_text(self.category),
            cuisine: optional_text(self.cuisine),
            difficulty: optional_text(self.difficulty),
            image_url,
        })
    }
}

fn require_text(value: Option<String>, msg: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ApiError::bad_request(msg)),
    }
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_non_negative(value: Option<i32>, field: &str) -> Result<(), ApiError> {
    match value {
        Some(n) if n < 0 => Err(ApiError::bad_request(format!(
            "{field} must be non-negative"
        ))),
        _ => Ok(()),
    }
}

pub(crate) fn is_valid_http_url(url: &str) -> bool {
    lazy_static! {
        static ref URL_RE: Regex = Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap();
    }
    URL_RE.is_match(url)
}

/// Recipe record as returned to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub instructions: String,
    pub prep_time_minutes: Option<i32>,
    pub cook_time_minutes: Option<i32>,
    pub servings: Option<i32>,
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub difficulty: Option<String>,
    pub image_url: Option<String>,
    pub user_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Recipe> for RecipeResponse {
    fn from(r: Recipe) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            instructions: r.instructions,
            prep_time_minutes: r.prep_time_minutes,
            cook_time_minutes: r.cook_time_minutes,
            servings: r.servings,
            category: r.category,
            cuisine: r.cuisine,
            difficulty: r.difficulty,
            image_url: r.image_url,
            user_id: r.user_id,
            created_at: r.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn minimal_request() -> CreateRecipeRequest {
        CreateRecipeRequest {
            title: Some("Soup".into()),
            instructions: Some("Boil.".into()),
            ..Default::default()
        }
    }

    #[test]
    fn minimal_payload_validates() {
        let new = minimal_request().validate().expect("should validate");
        assert_eq!(new.title, "Soup");
        assert_eq!(new.instructions, "Boil.");
        assert!(new.prep_time_minutes.is_none());
        assert!(new.image_url.is_none());
    }

    #[test]
    fn missing_title_is_rejected() {
        let req = CreateRecipeRequest {
            title: None,
            ..minimal_request()
        };
        assert!(matches!(req.validate(), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn whitespace_title_is_rejected() {
        let req = CreateRecipeRequest {
            title: Some("   ".into()),
            ..minimal_request()
        };
        assert!(matches!(req.validate(), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn missing_instructions_is_rejected() {
        let req = CreateRecipeRequest {
            instructions: Some(String::new()),
            ..minimal_request()
        };
        assert!(matches!(req.validate(), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn negative_prep_time_is_rejected() {
        let req = CreateRecipeRequest {
            prep_time_minutes: Some(-5),
            ..minimal_request()
        };
        assert!(matches!(req.validate(), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn zero_servings_is_allowed() {
        let req = CreateRecipeRequest {
            servings: Some(0),
            ..minimal_request()
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn malformed_image_url_is_rejected() {
        let req = CreateRecipeRequest {
            image_url: Some("not a url".into()),
            ..minimal_request()
        };
        assert!(matches!(req.validate(), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn empty_image_url_is_treated_as_absent() {
        let req = CreateRecipeRequest {
            image_url: Some("  ".into()),
            ..minimal_request()
        };
        let new = req.validate().expect("should validate");
        assert!(new.image_url.is_none());
    }

    #[test]
    fn free_text_fields_are_trimmed() {
        let req = CreateRecipeRequest {
            title: Some("  Soup  ".into()),
            category: Some(" Dinner ".into()),
            cuisine: Some("".into()),
            ..minimal_request()
        };
        let new = req.validate().expect("should validate");
        assert_eq!(new.title, "Soup");
        assert_eq!(new.category.as_deref(), Some("Dinner"));
        assert!(new.cuisine.is_none());
    }

    #[test]
    fn camel_case_body_deserializes() {
        let req: CreateRecipeRequest = serde_json::from_str(
            r#"{"title":"Soup","instructions":"Boil.","prepTimeMinutes":10,"imageUrl":"https://example.com/soup.jpg"}"#,
        )
        .unwrap();
        assert_eq!(req.prep_time_minutes, Some(10));
        assert_eq!(req.image_url.as_deref(), Some("https://example.com/soup.jpg"));
    }

    #[test]
    fn url_check_accepts_http_and_https_only() {
        assert!(is_valid_http_url("https://example.com/a.png"));
        assert!(is_valid_http_url("http://cdn.local/x"));
        assert!(!is_valid_http_url("ftp://example.com/a.png"));
        assert!(!is_valid_http_url("javascript:alert(1)"));
        assert!(!is_valid_http_url("https://bad host/x"));
    }

    #[test]
    fn response_uses_camel_case_and_nulls_for_absent_optionals() {
        let response = RecipeResponse {
            id: Uuid::new_v4(),
            title: "Soup".into(),
            description: None,
            instructions: "Boil.".into(),
            prep_time_minutes: None,
            cook_time_minutes: None,
            servings: None,
            category: None,
            cuisine: None,
            difficulty: None,
            image_url: None,
            user_id: Uuid::new_v4(),
            created_at: datetime!(2026-01-02 03:04:05 UTC),
        };

        let json: serde_json::Value = serde_json::to_value(&response).unwrap();
        assert!(json.get("prepTimeMinutes").unwrap().is_null());
        assert!(json.get("imageUrl").unwrap().is_null());
        assert_eq!(json["title"], "Soup");
        assert_eq!(json["createdAt"], "2026-01-02T03:04:05Z");
        assert!(json.get("userId").is_some());
        // snake_case must not leak into the wire format
        assert!(json.get("prep_time_minutes").is_none());
    }
}
