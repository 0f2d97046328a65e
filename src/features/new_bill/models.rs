/// Pourcentage appliqué quand le champ du formulaire est vide ou illisible
pub const DEFAULT_PCT: f64 = 20.0;

/// Types MIME acceptés pour un justificatif
pub const ALLOWED_RECEIPT_TYPES: [&str; 3] = ["image/jpg", "image/jpeg", "image/png"];

/// Vérifie qu'un type MIME appartient à la liste des images acceptées
pub fn is_allowed_receipt_type(mime_type: &str) -> bool {
    ALLOWED_RECEIPT_TYPES
        .iter()
        .any(|allowed| mime_type.eq_ignore_ascii_case(allowed))
}

/// Champs bruts du formulaire « Envoyer une note de frais »
///
/// Les valeurs sont celles des champs de saisie, sans conversion: c'est le
/// conteneur qui les interprète au moment de la soumission.
#[derive(Debug, Clone, Default)]
pub struct NewBillForm {
    pub expense_type: String,
    pub name: String,
    pub date: String,
    pub amount: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

/// Fichier sélectionné dans le champ justificatif
#[derive(Debug, Clone)]
pub struct FileSelection {
    pub file_name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// Justificatif téléversé, en attente de la soumission du formulaire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedReceipt {
    pub file_url: String,
    /// Clé de l'enregistrement créé au dépôt, reprise à la soumission
    pub key: String,
    pub file_name: String,
}
