use crate::server::error::config::ConfigError;

/// Runtime configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string for the SQLite database.
    pub database_url: String,
    /// Address the HTTP listener binds to.
    pub bind_address: String,
    /// Directory product and gallery images are written to.
    pub upload_dir: String,
    /// SMTP relay used for order notifications.
    pub mail_host: String,
    /// Mailbox the notification is sent from and to.
    pub mail_user: Option<String>,
    /// App password for `mail_user`.
    pub mail_pass: Option<String>,
}

impl Config {
    /// Reads configuration from environment variables.
    ///
    /// `DATABASE_URL` is required; everything else has a default or is
    /// optional. Mail credentials being absent disables notifications
    /// rather than failing startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;
        let port = std::env::var("PORT").unwrap_or_else(|_| String::from("5000"));
        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| String::from("uploads"));
        let mail_host =
            std::env::var("MAIL_HOST").unwrap_or_else(|_| String::from("smtp.gmail.com"));

        Ok(Self {
            database_url,
            bind_address: format!("0.0.0.0:{port}"),
            upload_dir,
            mail_host,
            mail_user: std::env::var("MAIL_USER").ok(),
            mail_pass: std::env::var("MAIL_PASS").ok(),
        })
    }
}
