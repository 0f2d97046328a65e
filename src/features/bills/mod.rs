/// Vue « Mes notes de frais »
///
/// Ce module rassemble le modèle de la note de frais, sa mise en forme
/// d'affichage (date courte, libellé de statut) et le conteneur qui pilote
/// la page: récupération ordonnée de la liste, aperçu du justificatif,
/// passage au formulaire de création.
pub mod container;
pub mod format;
pub mod models;

// Interface publique du module

// Modèles
pub use models::{Bill, BillDraft, BillRow, BillStatus};

// Mise en forme
pub use format::format_date;

// Conteneur
pub use container::BillsContainer;
