use super::{BillsStore, FileReference, ReceiptFile, Resource};
use crate::features::bills::models::{Bill, BillDraft};
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use log::{debug, error, info};
use url::Url;

/// Client HTTP du Store
///
/// Porte le client réseau et l'URL de base; les poignées de ressource sont
/// fabriquées à la demande et ne conservent aucun état entre deux appels.
#[derive(Clone)]
pub struct HttpStore {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpStore {
    /// Initialise le client à partir de la configuration
    ///
    /// # Arguments
    /// * `config` - la configuration de l'application
    ///
    /// # Retour
    /// Le client, ou une erreur de configuration si l'URL de base est
    /// invalide
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let mut base_url = Url::parse(&config.api_base_url).map_err(|e| {
            error!("URL d'API invalide ({}): {e}", config.api_base_url);
            AppError::configuration(format!("URL d'API invalide: {e}"))
        })?;

        // Url::join remplace le dernier segment sans barre oblique finale
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        info!("Store initialisé: base_url={base_url}");
        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
        })
    }

    /// Fabrique la poignée d'une ressource
    pub fn resource(&self, resource: Resource) -> HttpResource {
        HttpResource {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            resource,
        }
    }

    /// Poignée de la ressource « bills »
    pub fn bills(&self) -> HttpResource {
        self.resource(Resource::Bills)
    }
}

/// Poignée HTTP d'une ressource nommée
#[derive(Clone)]
pub struct HttpResource {
    client: reqwest::Client,
    base_url: Url,
    resource: Resource,
}

impl HttpResource {
    /// URL de la collection (ex. `http://localhost:5678/bills`)
    fn collection_url(&self) -> AppResult<Url> {
        self.base_url
            .join(self.resource.path())
            .map_err(|e| AppError::configuration(format!("URL de ressource invalide: {e}")))
    }

    /// URL d'un enregistrement (ex. `http://localhost:5678/bills/{id}`)
    fn record_url(&self, id: &str) -> AppResult<Url> {
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|_| AppError::configuration("URL d'API sans segments de chemin".to_string()))?
            .push(id);
        Ok(url)
    }
}

/// Traduit un statut HTTP d'échec en rejet du Store
///
/// Le message reprend la forme historique affichée par la vue
/// (« Erreur 404 », « Erreur 500 », ...).
fn status_error(status: reqwest::StatusCode) -> AppError {
    AppError::network(format!("Erreur {}", status.as_u16()))
}

#[async_trait]
impl BillsStore for HttpResource {
    async fn list(&self) -> AppResult<Vec<Bill>> {
        let url = self.collection_url()?;
        debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            error!("échec de la liste des notes: statut {}", response.status());
            return Err(status_error(response.status()));
        }

        // Validation à la frontière: un enregistrement difforme est signalé
        // plutôt que propagé silencieusement vers la vue
        let raw: Vec<serde_json::Value> = response.json().await?;
        raw.iter().map(Bill::from_raw).collect()
    }

    async fn create(
        &self,
        draft: BillDraft,
        file: Option<ReceiptFile>,
    ) -> AppResult<FileReference> {
        let url = self.collection_url()?;
        debug!("POST {url}");

        let mut form = reqwest::multipart::Form::new();
        for (field, value) in draft.form_fields()? {
            form = form.text(field, value);
        }
        if let Some(file) = file {
            info!(
                "dépôt du justificatif: file_name={}, size={} octets",
                file.file_name,
                file.data.len()
            );
            let part = reqwest::multipart::Part::bytes(file.data)
                .file_name(file.file_name)
                .mime_str(&file.mime_type)?;
            form = form.part("file", part);
        }

        let response = self.client.post(url).multipart(form).send().await?;
        if !response.status().is_success() {
            error!("échec de la création: statut {}", response.status());
            return Err(status_error(response.status()));
        }

        Ok(response.json::<FileReference>().await?)
    }

    async fn update(&self, id: &str, draft: BillDraft) -> AppResult<Bill> {
        let url = self.record_url(id)?;
        debug!("PATCH {url}");

        let response = self.client.patch(url).json(&draft).send().await?;
        if !response.status().is_success() {
            error!(
                "échec de la mise à jour de {id}: statut {}",
                response.status()
            );
            return Err(status_error(response.status()));
        }

        let raw: serde_json::Value = response.json().await?;
        Bill::from_raw(&raw)
    }
}
