use thiserror::Error;

/// Type d'erreur unifié de la couche client
#[derive(Debug, Error)]
pub enum AppError {
    /// Entrée refusée par une règle locale (type de fichier du justificatif).
    /// Toujours absorbée au point de détection, jamais remontée à la vue.
    #[error("Erreur de validation: {0}")]
    Validation(String),

    /// Rejet du Store (back-end injoignable, 404, 500...). Le message est
    /// affiché tel quel par la vue (« Erreur 404 », « Erreur 500 »).
    #[error("{0}")]
    Network(String),

    /// Donnée illisible (date non formatable, enregistrement difforme)
    #[error("Erreur de format: {0}")]
    Format(String),

    /// Configuration invalide (URL d'API, variables d'environnement)
    #[error("Erreur de configuration: {0}")]
    Configuration(String),

    /// Accès concurrent impossible (verrou empoisonné)
    #[error("Erreur de concurrence: {0}")]
    Concurrency(String),

    /// Erreur d'entrée/sortie
    #[error("Erreur d'E/S: {0}")]
    Io(#[from] std::io::Error),

    /// Erreur d'analyse JSON
    #[error("Erreur d'analyse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Sévérité d'une erreur, pour la journalisation
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ErrorSeverity {
    /// Faible (entrée utilisateur refusée, date non formatable)
    Low,
    /// Moyenne (erreur réseau transitoire)
    Medium,
    /// Haute (configuration ou état interne invalide)
    High,
}

impl AppError {
    /// Message destiné à l'utilisateur
    ///
    /// # Retour
    /// Le texte affichable en l'état par la couche de vue. Les rejets du
    /// Store sont restitués mot pour mot.
    pub fn user_message(&self) -> &str {
        match self {
            AppError::Validation(msg) => msg,
            AppError::Network(msg) => msg,
            AppError::Format(msg) => msg,
            AppError::Configuration(_) => "Erreur de configuration de l'application",
            AppError::Concurrency(_) => "Erreur interne, veuillez réessayer",
            AppError::Io(_) => "Erreur d'accès aux fichiers",
            AppError::Json(_) => "Erreur de lecture des données",
        }
    }

    /// Détails complets de l'erreur, pour les journaux
    pub fn details(&self) -> String {
        format!("{self}")
    }

    /// Sévérité de l'erreur
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Validation(_) => ErrorSeverity::Low,
            AppError::Format(_) => ErrorSeverity::Low,
            AppError::Network(_) => ErrorSeverity::Medium,
            AppError::Io(_) => ErrorSeverity::Medium,
            AppError::Json(_) => ErrorSeverity::Medium,
            AppError::Configuration(_) => ErrorSeverity::High,
            AppError::Concurrency(_) => ErrorSeverity::High,
        }
    }

    /// Construit une erreur de validation
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    /// Construit une erreur réseau
    ///
    /// # Arguments
    /// * `message` - le message tel qu'il sera rendu par la vue
    pub fn network<S: Into<String>>(message: S) -> Self {
        AppError::Network(message.into())
    }

    /// Construit une erreur de format
    pub fn format<S: Into<String>>(message: S) -> Self {
        AppError::Format(message.into())
    }

    /// Construit une erreur de configuration
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Construit une erreur de concurrence
    pub fn concurrency<S: Into<String>>(message: S) -> Self {
        AppError::Concurrency(message.into())
    }
}

/// Conversion vers String (pour les couches qui n'exposent que du texte)
impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        error.user_message().to_string()
    }
}

/// Les erreurs de transport reqwest sont des erreurs réseau
impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Network(format!("Erreur réseau: {error}"))
    }
}

/// Alias de Result utilisé dans toute la couche
pub type AppResult<T> = Result<T, AppError>;
