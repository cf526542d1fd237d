use serde_json::{json, Value};

/// JSON Schema (draft-07) for the breeds array. Extra per-record fields are
/// allowed; the curation tooling stores verification metadata alongside the
/// modeled fields.
pub fn breeds_schema() -> Value {
    let span = json!({
        "type": "object",
        "required": ["min", "max"],
        "properties": {
            "min": {"type": "number"},
            "max": {"type": "number"}
        }
    });
    let care_level = json!({"type": "string", "enum": ["Low", "Moderate", "High"]});

    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": "Large dog breeds",
        "type": "array",
        "items": {
            "type": "object",
            "required": [
                "name", "origin", "weight_lbs", "height_in", "lifespan_yrs",
                "temperament", "purpose", "grooming", "exercise", "shedding",
                "trainability", "good_with_kids", "good_with_dogs",
                "coat", "health_notes", "color"
            ],
            "properties": {
                "name": {"type": "string", "minLength": 1},
                "origin": {"type": "string"},
                "weight_lbs": span.clone(),
                "height_in": span.clone(),
                "lifespan_yrs": span,
                "temperament": {"type": "array", "items": {"type": "string"}, "minItems": 1},
                "purpose": {"type": "array", "items": {"type": "string"}, "minItems": 1},
                "grooming": care_level.clone(),
                "exercise": care_level.clone(),
                "shedding": care_level,
                "trainability": {
                    "type": "string",
                    "enum": ["Very Easy", "Easy", "Moderate", "Hard"]
                },
                "good_with_kids": {"type": "boolean"},
                "good_with_dogs": {"type": "boolean"},
                "coat": {"type": "string"},
                "health_notes": {"type": "string"},
                "color": {"type": "string"},
                "service_dog_score": {
                    "type": ["integer", "null"],
                    "minimum": 1,
                    "maximum": 5
                },
                "dogtime_slug": {"type": "string", "pattern": "^[a-z0-9]+(-[a-z0-9]+)*$"},
                "source_url": {"type": "string"}
            }
        }
    })
}

/// Validate raw dataset JSON against the breeds schema.
/// Returns Ok(()) if valid, Err with one formatted entry per violation.
pub fn validate_against_schema(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let compiled = jsonschema::validator_for(schema)
        .map_err(|e| vec![format!("Schema compilation error: {}", e)])?;

    let errors: Vec<String> = compiled
        .iter_errors(data)
        .map(|error| {
            let path_str = error.instance_path.to_string();
            let location = if path_str.is_empty() {
                "root".to_string()
            } else {
                path_str
            };
            format!("{} at {}", error, location)
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Convenience: validate dataset text straight from a source.
pub fn validate_breeds_json(data: &Value) -> Result<(), Vec<String>> {
    validate_against_schema(&breeds_schema(), data)
}
