use serde::Deserialize;
use serde_json::Value;

/// The envelope a WriteFreely server wraps every JSON body in.
///
/// `data` stays raw so callers can apply their own decode contract to it.
#[derive(Deserialize)]
pub struct ApiResponse {
    pub code: u16,
    #[serde(default)]
    pub data: Value,
    pub error_msg: Option<String>,
}
