/// Type d'erreur unifié et alias de résultat
pub mod errors;

/// Configuration, session utilisateur et journalisation
pub mod config;

// Réexports pratiques
pub use config::{
    get_environment, initialize_logging_system, AppConfig, Environment, UserSession, UserType,
};
pub use errors::{AppError, AppResult, ErrorSeverity};
