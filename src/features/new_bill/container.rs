use crate::app::router::{NavigationHandle, RoutePath};
use crate::app::view::ViewSurface;
use crate::features::bills::models::{BillDraft, BillStatus};
use crate::features::new_bill::models::{
    is_allowed_receipt_type, FileSelection, NewBillForm, StagedReceipt, DEFAULT_PCT,
};
use crate::shared::config::UserSession;
use crate::shared::errors::{AppError, AppResult};
use crate::store::{BillsStore, ReceiptFile};
use log::{error, info, warn};
use std::sync::{Arc, Mutex, MutexGuard};

/// Conteneur du formulaire « Envoyer une note de frais »
///
/// Machine à états sur une soumission en cours: la sélection d'un fichier
/// accepté le téléverse immédiatement et retient sa référence; la soumission
/// du formulaire assemble la note complète avec la référence présente à ce
/// moment-là. La soumission n'attend jamais un téléversement en cours: s'il
/// n'a pas abouti, la note part sans justificatif (comportement assumé).
pub struct NewBillContainer {
    store: Arc<dyn BillsStore>,
    view: Arc<dyn ViewSurface>,
    on_navigate: NavigationHandle,
    session: UserSession,
    staged: Mutex<Option<StagedReceipt>>,
}

impl NewBillContainer {
    /// Construit le conteneur
    ///
    /// # Arguments
    /// * `store` - la poignée de la ressource « bills »
    /// * `view` - la surface de vue du formulaire
    /// * `on_navigate` - la fonction de navigation injectée
    /// * `session` - la session lue au démarrage; son adresse email est
    ///   reportée sur la note créée
    pub fn new(
        store: Arc<dyn BillsStore>,
        view: Arc<dyn ViewSurface>,
        on_navigate: NavigationHandle,
        session: UserSession,
    ) -> Self {
        Self {
            store,
            view,
            on_navigate,
            session,
            staged: Mutex::new(None),
        }
    }

    fn staged(&self) -> AppResult<MutexGuard<'_, Option<StagedReceipt>>> {
        self.staged.lock().map_err(|e| {
            AppError::concurrency(format!("accès au justificatif en cours impossible: {e}"))
        })
    }

    /// Justificatif actuellement téléversé, s'il y en a un
    pub fn staged_receipt(&self) -> AppResult<Option<StagedReceipt>> {
        Ok(self.staged()?.clone())
    }

    /// Sélection d'un fichier dans le champ justificatif
    ///
    /// Un type refusé vide le champ et n'envoie rien: l'erreur est absorbée
    /// ici. Un fichier accepté est téléversé immédiatement et sa référence
    /// remplace l'éventuelle référence précédente.
    ///
    /// # Arguments
    /// * `selection` - le fichier choisi par l'utilisateur
    ///
    /// # Retour
    /// Ok après un refus local comme après un dépôt réussi; le rejet du
    /// Store est rendu par la vue puis remonté
    pub async fn handle_change_file(&self, selection: FileSelection) -> AppResult<()> {
        if !is_allowed_receipt_type(&selection.mime_type) {
            warn!(
                "type de fichier refusé pour le justificatif: {} ({})",
                selection.file_name, selection.mime_type
            );
            self.view.clear_file_input();
            return Ok(());
        }

        let file_name = selection.file_name.clone();
        let file = ReceiptFile {
            file_name: file_name.clone(),
            mime_type: selection.mime_type,
            data: selection.data,
        };

        match self
            .store
            .create(BillDraft::for_upload(self.session.email.clone()), Some(file))
            .await
        {
            Ok(reference) => {
                info!(
                    "justificatif téléversé: key={}, file_url={}",
                    reference.key, reference.file_url
                );
                *self.staged()? = Some(StagedReceipt {
                    file_url: reference.file_url,
                    key: reference.key,
                    file_name,
                });
                Ok(())
            }
            Err(e) => {
                error!("échec du dépôt du justificatif: {}", e.details());
                self.view.render_error(e.user_message());
                Err(e)
            }
        }
    }

    /// Soumission du formulaire
    ///
    /// Assemble la note complète (statut « pending », email de la session,
    /// référence du justificatif telle qu'elle existe à cet instant) et la
    /// persiste: mise à jour de l'enregistrement créé au dépôt quand il y en
    /// a un, création sinon. Navigue vers la liste en cas de succès; en cas
    /// d'échec, rend le message du Store tel quel et laisse l'état en place
    /// pour une nouvelle tentative de l'utilisateur.
    pub async fn handle_submit(&self, form: NewBillForm) -> AppResult<()> {
        let staged = self.staged()?.clone();
        let draft = self.assemble_draft(&form, staged.as_ref());

        let result = match &staged {
            Some(receipt) => self.store.update(&receipt.key, draft).await.map(|_| ()),
            None => self.store.create(draft, None).await.map(|_| ()),
        };

        match result {
            Ok(()) => {
                info!("note de frais soumise: name={}", form.name);
                (self.on_navigate)(RoutePath::Bills);
                Ok(())
            }
            Err(e) => {
                error!("échec de la soumission: {}", e.details());
                self.view.render_error(e.user_message());
                Err(e)
            }
        }
    }

    /// Assemble la note candidate à partir des champs bruts du formulaire
    fn assemble_draft(&self, form: &NewBillForm, staged: Option<&StagedReceipt>) -> BillDraft {
        let amount = form.amount.parse::<f64>().unwrap_or_else(|_| {
            warn!("montant illisible « {} », 0 retenu", form.amount);
            0.0
        });
        let pct = form.pct.parse::<f64>().unwrap_or(DEFAULT_PCT);

        BillDraft {
            email: self.session.email.clone(),
            expense_type: Some(form.expense_type.clone()),
            name: Some(form.name.clone()),
            amount: Some(amount),
            date: Some(form.date.clone()),
            vat: (!form.vat.is_empty()).then(|| form.vat.clone()),
            pct: Some(pct),
            commentary: (!form.commentary.is_empty()).then(|| form.commentary.clone()),
            file_url: staged.map(|s| s.file_url.clone()),
            file_name: staged.map(|s| s.file_name.clone()),
            status: Some(BillStatus::Pending),
        }
    }
}
