/// Accès au Store: l'unique passerelle vers les données persistées
///
/// Le Store expose des poignées typées par ressource. Les trois opérations
/// sont idempotentes au niveau de l'interface: rejouer un appel échoué est
/// sans danger, et aucune donnée n'est mise en cache localement.
pub mod http;

#[cfg(test)]
pub mod mock;

use crate::features::bills::models::{Bill, BillDraft};
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Ressources connues du back-end
///
/// Un nom de ressource invalide est irreprésentable: la poignée s'obtient
/// par ce type fermé, pas par une chaîne libre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Bills,
}

impl Resource {
    /// Segment de chemin de la ressource dans l'API
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Bills => "bills",
        }
    }
}

/// Justificatif brut accompagnant la création d'une note de frais
#[derive(Debug, Clone)]
pub struct ReceiptFile {
    /// Nom d'origine du fichier sélectionné
    pub file_name: String,
    /// Type MIME annoncé (image/png, image/jpeg, ...)
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// Référence renvoyée par le Store après un dépôt de fichier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReference {
    /// URL du fichier stocké
    pub file_url: String,
    /// Identifiant de l'enregistrement créé
    pub key: String,
}

/// Opérations de persistance de la ressource « bills »
///
/// Chaque appel est un aller-retour complet vers le back-end; la poignée
/// est sans état et peut être partagée librement.
#[async_trait]
pub trait BillsStore: Send + Sync {
    /// Liste les notes de frais existantes (zéro ou plus)
    ///
    /// # Retour
    /// Les enregistrements validés, ou une erreur réseau si le back-end est
    /// injoignable, ou une erreur de format si un enregistrement est difforme
    async fn list(&self) -> AppResult<Vec<Bill>>;

    /// Crée une note de frais candidate, avec son éventuel justificatif
    ///
    /// # Arguments
    /// * `draft` - la note candidate (peut être réduite à l'adresse email
    ///   lors du simple dépôt du justificatif)
    /// * `file` - le fichier justificatif brut, s'il y en a un
    ///
    /// # Retour
    /// La référence du fichier stocké et la clé de l'enregistrement
    async fn create(&self, draft: BillDraft, file: Option<ReceiptFile>)
        -> AppResult<FileReference>;

    /// Met à jour la note de frais identifiée par `id`
    ///
    /// # Retour
    /// La note telle que persistée
    async fn update(&self, id: &str, draft: BillDraft) -> AppResult<Bill>;
}
