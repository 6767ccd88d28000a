use serde::{Deserialize, Serialize};

/// Roles the signup form offers. Membership is enforced where values are
/// collected (argument parsing / prompts), not by validation.
pub const ROLES: [&str; 4] = ["Pilot", "Engineer", "Scientist", "Medic"];

/// Destinations the signup form offers.
pub const DESTINATIONS: [&str; 4] = ["Moon", "Mars", "ISS", "Europa"];

/// Experience levels; exactly one must be chosen on signup.
pub const EXPERIENCE_LEVELS: [&str; 3] = ["Rookie", "Experienced", "Veteran"];

/// One crew signup.
///
/// All fields are plain strings, and every field defaults to empty so that a
/// stored object missing some keys still decodes. `snack` and `motto` are
/// optional free text and are routinely empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AstronautRecord {
    pub name: String,
    pub email: String,
    pub role: String,
    pub destination: String,
    pub experience: String,
    pub snack: String,
    pub motto: String,
}

/// Raw field values collected from the signup form, before validation.
///
/// `snack` and `motto` are `None` when their inputs were never presented;
/// both default to the empty string in the stored record.
#[derive(Debug, Clone, Default)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub role: String,
    pub destination: String,
    pub experience: String,
    pub snack: Option<String>,
    pub motto: Option<String>,
}
