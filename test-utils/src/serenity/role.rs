//! Test factory for creating Serenity Role objects.

use serde_json::Value;
use serenity::all::Role;

/// Builds the JSON payload Discord sends for a role.
///
/// All other fields are set to reasonable defaults (not hoisted, not managed,
/// not mentionable, with zero permissions).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `color` - Role color as a 32-bit integer (RGB)
/// - `position` - Role position in the hierarchy (higher = more important)
pub fn role_json(role_id: u64, name: &str, color: u32, position: i16) -> Value {
    serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": color,
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": "0",
        "managed": false,
        "mentionable": false,
    })
}

/// Creates a test Serenity Role with customizable fields.
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
pub fn create_test_role(role_id: u64, name: &str, color: u32, position: i16) -> Role {
    serde_json::from_value(role_json(role_id, name, color, position))
        .expect("Failed to create test role - invalid JSON structure")
}
