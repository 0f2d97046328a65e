use crate::app::router::{NavigationHandle, RoutePath};
use crate::app::view::ViewSurface;
use crate::features::bills::models::{Bill, BillRow};
use crate::shared::errors::AppResult;
use crate::store::BillsStore;
use chrono::NaiveDate;
use log::{debug, warn};
use std::cmp::Ordering;
use std::sync::Arc;

/// Conteneur de la vue « Mes notes de frais »
///
/// À l'activation de la vue, il récupère la liste auprès du Store, met
/// chaque enregistrement en forme d'affichage et ordonne le résultat. Il
/// porte aussi les deux actions de la page: l'aperçu du justificatif et le
/// passage au formulaire de nouvelle note.
pub struct BillsContainer {
    store: Arc<dyn BillsStore>,
    view: Arc<dyn ViewSurface>,
    on_navigate: NavigationHandle,
}

impl BillsContainer {
    /// Construit le conteneur
    ///
    /// # Arguments
    /// * `store` - la poignée de la ressource « bills »
    /// * `view` - la surface de vue de la page
    /// * `on_navigate` - la fonction de navigation injectée
    pub fn new(
        store: Arc<dyn BillsStore>,
        view: Arc<dyn ViewSurface>,
        on_navigate: NavigationHandle,
    ) -> Self {
        Self {
            store,
            view,
            on_navigate,
        }
    }

    /// Récupère les notes de frais prêtes à l'affichage
    ///
    /// Les lignes sont ordonnées de la plus récente à la plus ancienne selon
    /// la date d'origine; les dates sont mises en forme courte française et
    /// les statuts remplacés par leur libellé. Aucun enregistrement n'est
    /// écarté, même quand sa date est illisible.
    ///
    /// # Retour
    /// Les lignes ordonnées, ou le rejet du Store tel quel
    pub async fn get_bills(&self) -> AppResult<Vec<BillRow>> {
        let mut bills = self.store.list().await?;
        debug!("{} notes de frais reçues du Store", bills.len());

        sort_by_date_desc(&mut bills);
        Ok(bills.iter().map(BillRow::from_bill).collect())
    }

    /// Clic sur l'icône « œil » d'une ligne: ouvre l'aperçu du justificatif
    pub fn handle_click_icon_eye(&self, row: &BillRow) {
        let Some(raw_url) = row.file_url.as_deref().filter(|u| !u.is_empty()) else {
            warn!("aucun justificatif attaché à la note {}", row.id);
            return;
        };

        match url::Url::parse(raw_url) {
            Ok(file_url) => {
                let file_name = row.file_name.as_deref().unwrap_or("justificatif");
                self.view.open_receipt_preview(file_url.as_str(), file_name);
            }
            Err(e) => warn!("URL de justificatif invalide pour la note {}: {e}", row.id),
        }
    }

    /// Clic sur « Nouvelle note de frais »: navigation vers le formulaire
    pub fn handle_click_new_bill(&self) {
        (self.on_navigate)(RoutePath::NewBill);
    }
}

/// Ordonne les notes par date d'origine, de la plus récente à la plus
/// ancienne
///
/// L'ordre est total et stable quel que soit le contenu: la clé de tri est
/// la date analysée quand elle existe, puis la chaîne brute en repli
/// lexicographique (égalités et dates illisibles comprises).
pub(crate) fn sort_by_date_desc(bills: &mut [Bill]) {
    bills.sort_by(|a, b| compare_dates_desc(&a.date, &b.date));
}

fn date_key(raw: &str) -> (Option<NaiveDate>, &str) {
    (NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok(), raw)
}

fn compare_dates_desc(a: &str, b: &str) -> Ordering {
    date_key(b).cmp(&date_key(a))
}
