/// Formulaire « Envoyer une note de frais »
///
/// Ce module porte la validation du justificatif (types d'image acceptés),
/// son téléversement immédiat, et la soumission du formulaire qui assemble
/// puis persiste la note complète.
pub mod container;
pub mod models;

// Interface publique du module

// Modèles
pub use models::{
    is_allowed_receipt_type, FileSelection, NewBillForm, StagedReceipt, ALLOWED_RECEIPT_TYPES,
    DEFAULT_PCT,
};

// Conteneur
pub use container::NewBillContainer;
