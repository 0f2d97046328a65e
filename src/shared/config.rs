use crate::shared::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// URL du back-end utilisée quand `BILLED_API_URL` n'est pas définie
pub const DEFAULT_API_URL: &str = "http://localhost:5678";

/// Environnement d'exécution de l'application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Environnement de développement
    Development,
    /// Environnement de production
    Production,
}

impl Environment {
    /// Interprète la valeur de la variable `BILLED_ENV`
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }
}

/// Lit l'environnement d'exécution depuis `BILLED_ENV`
pub fn get_environment() -> Environment {
    std::env::var("BILLED_ENV")
        .map(|value| Environment::parse(&value))
        .unwrap_or(Environment::Development)
}

/// Configuration de l'application, lue une fois au démarrage
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// URL de base de l'API du back-end
    pub api_base_url: String,
    /// Niveau de journalisation demandé
    pub log_level: String,
    /// Environnement d'exécution
    pub environment: Environment,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            log_level: "info".to_string(),
            environment: Environment::Development,
        }
    }
}

impl AppConfig {
    /// Charge la configuration depuis les variables d'environnement
    ///
    /// Le fichier `.env` est lu s'il existe; en production les variables
    /// sont fournies directement par l'environnement.
    ///
    /// # Retour
    /// La configuration de l'application
    pub fn from_env() -> Self {
        if dotenv::dotenv().is_err() {
            log::debug!("aucun fichier .env trouvé, lecture directe de l'environnement");
        }

        let environment = get_environment();
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| {
            if environment == Environment::Development {
                "debug".to_string()
            } else {
                "info".to_string()
            }
        });
        let api_base_url =
            std::env::var("BILLED_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self {
            api_base_url,
            log_level,
            environment,
        }
    }
}

/// Rôle de l'utilisateur connecté
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

/// Session de l'utilisateur connecté
///
/// La valeur est lue une seule fois, à la construction des conteneurs, depuis
/// la clé « user » du stockage persistant; les conteneurs ne relisent jamais
/// ce stockage ensuite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    /// Rôle (« Employee » ou « Admin »)
    #[serde(rename = "type")]
    pub user_type: UserType,
    /// Adresse électronique, reportée sur les notes de frais créées
    #[serde(default)]
    pub email: String,
}

impl UserSession {
    /// Désérialise la session depuis la valeur brute du stockage
    ///
    /// # Arguments
    /// * `raw` - contenu JSON de la clé « user »
    ///
    /// # Retour
    /// La session, ou une erreur de format si la valeur est illisible
    pub fn from_json(raw: &str) -> AppResult<Self> {
        serde_json::from_str(raw)
            .map_err(|e| AppError::format(format!("session utilisateur illisible: {e}")))
    }
}

/// Convertit un niveau textuel en filtre du journal
fn level_filter_from(level: &str) -> log::LevelFilter {
    match level.to_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        _ => log::LevelFilter::Info,
    }
}

/// Initialise le système de journalisation
///
/// À appeler une seule fois au démarrage de l'application.
pub fn initialize_logging_system(config: &AppConfig) {
    env_logger::Builder::from_default_env()
        .filter_level(level_filter_from(&config.log_level))
        .format_timestamp_secs()
        .format_module_path(false)
        .format_target(false)
        .init();

    log::info!(
        "journalisation initialisée: level={}, environment={:?}",
        config.log_level,
        config.environment
    );
}
