use std::env;

#[derive(Clone)]
pub struct AppConfig {
    pub server_port: u16,
    pub sqlite_path: String,
    pub database_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let server_port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(3000);

        let sqlite_path = env::var("SQLITE_PATH").unwrap_or_else(|_| "/tmp/test.db".to_string());
        let database_url = env::var("DATABASE_URL").ok();

        Self {
            server_port,
            sqlite_path,
            database_url,
        }
    }

    pub fn database_url(&self) -> String {
        if let Some(url) = &self.database_url {
            return url.clone();
        }

        let path = self.sqlite_path.trim();
        if path.starts_with("sqlite:") || path.starts_with("file:") {
            return path.to_string();
        }
        format!("sqlite://{}", path)
    }
}
