/// Runtime configuration shared with the route handlers.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Recipient phone for the WhatsApp deep link, international format
    /// without `+` (as `wa.me` expects).
    pub whatsapp_phone: String,
    /// Obscurity path segment the admin screens are mounted under.
    pub admin_path: String,
}

impl ServerConfig {
    /// Absolute path of the schedule admin screen.
    pub fn admin_schedules_path(&self) -> String {
        format!("/admin/{}/schedules", self.admin_path)
    }
}
