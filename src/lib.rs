//! Couche de coordination données/vues de l'application de notes de frais.
//!
//! Les employés déposent leurs notes de frais (avec justificatif) et
//! consultent leur historique; cette couche fait le lien entre le magasin
//! de données distant et les vues rendues:
//!
//! - le [`store`] est l'unique passerelle vers les données persistées
//!   (liste, création, mise à jour de la ressource « bills »);
//! - le conteneur [`features::bills`] récupère, met en forme et ordonne les
//!   notes pour l'affichage;
//! - le conteneur [`features::new_bill`] valide le justificatif téléversé et
//!   soumet la note complète;
//! - le routeur [`app::router`] associe les fragments d'URL aux vues et
//!   applique la redirection par rôle.

pub mod app;
pub mod features;
pub mod shared;
pub mod store;

// Réexports pratiques
pub use app::router::{NavIcon, NavigationHandle, RoutePath, Router};
pub use app::view::ViewSurface;
pub use features::bills::{Bill, BillDraft, BillRow, BillStatus, BillsContainer};
pub use features::new_bill::{FileSelection, NewBillContainer, NewBillForm, StagedReceipt};
pub use shared::config::{initialize_logging_system, AppConfig, Environment, UserSession, UserType};
pub use shared::errors::{AppError, AppResult, ErrorSeverity};
pub use store::http::{HttpResource, HttpStore};
pub use store::{BillsStore, FileReference, ReceiptFile, Resource};
