use crate::features::bills::format::format_date;
use crate::shared::errors::{AppError, AppResult};
use serde::{Deserialize, Deserializer, Serialize};

/// Statut d'une note de frais
///
/// Les transitions sont pilotées par le workflow du back-end; cette couche
/// se contente de les afficher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    /// Libellé présenté à l'utilisateur pour chaque statut
    pub fn label(&self) -> &'static str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            BillStatus::Refused => "Refused",
        }
    }
}

/// Note de frais telle que persistée par le Store
///
/// Les noms de champs suivent le contrat de l'API (camelCase, `type` pour la
/// catégorie). `id` est attribué par le Store à la création et immuable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    #[serde(default)]
    pub email: String,
    /// Catégorie de dépense (Transports, Hôtel et logement, ...)
    #[serde(rename = "type", default)]
    pub expense_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    /// Date calendaire au format AAAA-MM-JJ; une valeur illisible est
    /// tolérée à l'affichage
    #[serde(default)]
    pub date: String,
    /// TVA; le back-end renvoie tantôt une chaîne, tantôt un nombre
    #[serde(default, deserialize_with = "deserialize_numeric_string")]
    pub vat: Option<String>,
    #[serde(default)]
    pub pct: Option<f64>,
    #[serde(default)]
    pub commentary: Option<String>,
    /// URL du justificatif, renseignée après téléversement
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    pub status: BillStatus,
    #[serde(default)]
    pub comment_admin: Option<String>,
}

impl Bill {
    /// Valide et désérialise un enregistrement brut renvoyé par le Store
    ///
    /// # Arguments
    /// * `raw` - enregistrement JSON tel que reçu du réseau
    ///
    /// # Retour
    /// La note de frais, ou une erreur de format si l'enregistrement n'a pas
    /// la forme attendue
    pub fn from_raw(raw: &serde_json::Value) -> AppResult<Self> {
        serde_json::from_value(raw.clone())
            .map_err(|e| AppError::format(format!("enregistrement de note de frais invalide: {e}")))
    }
}

/// Note de frais candidate, assemblée par le conteneur NewBill
///
/// Tous les champs hormis `email` sont optionnels: le dépôt du justificatif
/// précède la saisie du formulaire. Les champs absents ne sont pas envoyés.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillDraft {
    pub email: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub expense_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BillStatus>,
}

impl BillDraft {
    /// Brouillon minimal accompagnant le téléversement d'un justificatif
    pub fn for_upload<S: Into<String>>(email: S) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    /// Aplati le brouillon en champs de formulaire multipart
    ///
    /// # Retour
    /// Les paires champ/valeur des champs renseignés
    pub fn form_fields(&self) -> AppResult<Vec<(String, String)>> {
        let mut fields = Vec::new();
        if let serde_json::Value::Object(map) = serde_json::to_value(self)? {
            for (key, value) in map {
                match value {
                    serde_json::Value::Null => {}
                    serde_json::Value::String(s) => fields.push((key, s)),
                    other => fields.push((key, other.to_string())),
                }
            }
        }
        Ok(fields)
    }
}

/// Ligne prête à l'affichage pour le tableau « Mes notes de frais »
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillRow {
    pub id: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    /// Date formatée en forme courte, ou valeur brute si elle est illisible
    pub date: String,
    /// Date d'origine, conservée pour l'ordre d'affichage
    pub raw_date: String,
    pub amount: f64,
    /// Libellé du statut (« En attente », « Accepté », « Refused »)
    pub status: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub email: String,
}

impl BillRow {
    /// Construit la ligne d'affichage d'une note de frais
    ///
    /// Une date non formatable n'interrompt jamais le lot: la valeur brute
    /// est reprise telle quelle et l'incident est journalisé.
    pub fn from_bill(bill: &Bill) -> Self {
        let date = match format_date(&bill.date) {
            Ok(formatted) => formatted,
            Err(e) => {
                log::warn!(
                    "date non formatable pour la note {}: {}",
                    bill.id,
                    e.details()
                );
                bill.date.clone()
            }
        };

        Self {
            id: bill.id.clone(),
            expense_type: bill.expense_type.clone(),
            name: bill.name.clone(),
            date,
            raw_date: bill.date.clone(),
            amount: bill.amount,
            status: bill.status.label().to_string(),
            file_url: bill.file_url.clone(),
            file_name: bill.file_name.clone(),
            email: bill.email.clone(),
        }
    }
}

/// Accepte une TVA envoyée comme chaîne ou comme nombre
fn deserialize_numeric_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "valeur de TVA inattendue: {other}"
        ))),
    }
}
