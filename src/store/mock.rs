//! Store factice pour les tests, repris du store simulé historique:
//! quatre notes de frais fixes, un dépôt de fichier qui répond toujours la
//! même référence, et des compteurs d'appels pour les assertions.

use super::{BillsStore, FileReference, ReceiptFile};
use crate::features::bills::models::{Bill, BillDraft, BillStatus};
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// URL renvoyée par le dépôt de fichier simulé
pub const MOCK_FILE_URL: &str = "https://localhost:3456/images/test.jpg";
/// Clé renvoyée par le dépôt de fichier simulé
pub const MOCK_KEY: &str = "1234";

/// Store en mémoire observable
pub struct MockStore {
    bills: Mutex<Vec<Bill>>,
    failure: Option<String>,
    pub list_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    pub last_created: Mutex<Option<(BillDraft, Option<String>)>>,
    pub last_updated: Mutex<Option<(String, BillDraft)>>,
}

impl MockStore {
    /// Store peuplé des quatre notes de frais de référence
    pub fn with_fixtures() -> Self {
        Self::with_bills(fixture_bills())
    }

    /// Store peuplé d'une liste arbitraire
    pub fn with_bills(bills: Vec<Bill>) -> Self {
        Self {
            bills: Mutex::new(bills),
            failure: None,
            list_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
            last_created: Mutex::new(None),
            last_updated: Mutex::new(None),
        }
    }

    /// Store dont toutes les opérations échouent avec le message donné
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::with_bills(Vec::new())
        }
    }

    fn check_failure(&self) -> AppResult<()> {
        match &self.failure {
            Some(message) => Err(AppError::network(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BillsStore for MockStore {
    async fn list(&self) -> AppResult<Vec<Bill>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self.bills.lock().unwrap().clone())
    }

    async fn create(
        &self,
        draft: BillDraft,
        file: Option<ReceiptFile>,
    ) -> AppResult<FileReference> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        let file_name = file.as_ref().map(|f| f.file_name.clone());
        *self.last_created.lock().unwrap() = Some((draft.clone(), file_name));

        // la note candidate devient visible au prochain list()
        self.bills
            .lock()
            .unwrap()
            .push(persisted_from_draft(MOCK_KEY, &draft));

        Ok(FileReference {
            file_url: MOCK_FILE_URL.to_string(),
            key: MOCK_KEY.to_string(),
        })
    }

    async fn update(&self, id: &str, draft: BillDraft) -> AppResult<Bill> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        *self.last_updated.lock().unwrap() = Some((id.to_string(), draft.clone()));

        let persisted = persisted_from_draft(id, &draft);
        let mut bills = self.bills.lock().unwrap();
        match bills.iter_mut().find(|bill| bill.id == id) {
            Some(existing) => *existing = persisted.clone(),
            None => bills.push(persisted.clone()),
        }

        Ok(persisted)
    }
}

/// Matérialise la persistance d'un brouillon, sans altérer ses champs
fn persisted_from_draft(id: &str, draft: &BillDraft) -> Bill {
    Bill {
        id: id.to_string(),
        email: draft.email.clone(),
        expense_type: draft.expense_type.clone().unwrap_or_default(),
        name: draft.name.clone().unwrap_or_default(),
        amount: draft.amount.unwrap_or_default(),
        date: draft.date.clone().unwrap_or_default(),
        vat: draft.vat.clone(),
        pct: draft.pct,
        commentary: draft.commentary.clone(),
        file_url: draft.file_url.clone(),
        file_name: draft.file_name.clone(),
        status: draft.status.unwrap_or(BillStatus::Pending),
        comment_admin: None,
    }
}

/// Note de frais de test
pub fn bill(id: &str, name: &str, date: &str, amount: f64, status: BillStatus) -> Bill {
    Bill {
        id: id.to_string(),
        email: "a@a".to_string(),
        expense_type: "Transports".to_string(),
        name: name.to_string(),
        amount,
        date: date.to_string(),
        vat: Some("20".to_string()),
        pct: Some(20.0),
        commentary: None,
        file_url: Some(MOCK_FILE_URL.to_string()),
        file_name: Some("test.jpg".to_string()),
        status,
        comment_admin: None,
    }
}

/// Les quatre notes de frais du jeu de données historique
pub fn fixture_bills() -> Vec<Bill> {
    vec![
        Bill {
            id: "47qAXb6fIm2zOKkLzMro".to_string(),
            email: "a@a".to_string(),
            expense_type: "Hôtel et logement".to_string(),
            name: "encore".to_string(),
            amount: 400.0,
            date: "2004-04-04".to_string(),
            vat: Some("80".to_string()),
            pct: Some(20.0),
            commentary: Some("séminaire billed".to_string()),
            file_url: Some("https://test.storage.tld/47qAXb6fIm2zOKkLzMro.jpg".to_string()),
            file_name: Some("preview-facture-free-201801-pdf-1.jpg".to_string()),
            status: BillStatus::Pending,
            comment_admin: Some("ok".to_string()),
        },
        Bill {
            id: "BeKy5Mo4jkmdfPGYpTxZ".to_string(),
            email: "a@a".to_string(),
            expense_type: "Transports".to_string(),
            name: "test1".to_string(),
            amount: 100.0,
            date: "2001-01-01".to_string(),
            vat: None,
            pct: Some(20.0),
            commentary: Some("plop".to_string()),
            file_url: Some("https://test.storage.tld/BeKy5Mo4jkmdfPGYpTxZ.jpg".to_string()),
            file_name: Some("billet-train.jpg".to_string()),
            status: BillStatus::Refused,
            comment_admin: Some("en fait non".to_string()),
        },
        Bill {
            id: "UIUZtnPQvnbFnB0ozvJh".to_string(),
            email: "a@a".to_string(),
            expense_type: "Services en ligne".to_string(),
            name: "test3".to_string(),
            amount: 300.0,
            date: "2003-03-03".to_string(),
            vat: Some("60".to_string()),
            pct: Some(20.0),
            commentary: None,
            file_url: Some("https://test.storage.tld/UIUZtnPQvnbFnB0ozvJh.jpg".to_string()),
            file_name: Some("facture-client-php.jpg".to_string()),
            status: BillStatus::Accepted,
            comment_admin: Some("bon bah d'accord".to_string()),
        },
        Bill {
            id: "qcCK3SzECmaZAGRrHjaC".to_string(),
            email: "a@a".to_string(),
            expense_type: "Restaurants et bars".to_string(),
            name: "test2".to_string(),
            amount: 200.0,
            date: "2002-02-02".to_string(),
            vat: Some("40".to_string()),
            pct: Some(20.0),
            commentary: Some("déjeuner d'équipe".to_string()),
            file_url: Some("https://test.storage.tld/qcCK3SzECmaZAGRrHjaC.jpg".to_string()),
            file_name: Some("note-restaurant.jpg".to_string()),
            status: BillStatus::Refused,
            comment_admin: Some("à valider".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_counts_calls_and_round_trips() {
        let store = MockStore::with_fixtures();

        let first = store.list().await.unwrap();
        let second = store.list().await.unwrap();

        assert_eq!(first.len(), 4);
        // sans écriture intermédiaire, deux lectures sont identiques
        assert_eq!(first, second);
        assert_eq!(store.list_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_create_answers_fixed_reference() {
        let store = MockStore::with_bills(Vec::new());

        let reference = store
            .create(BillDraft::for_upload("a@a"), None)
            .await
            .unwrap();

        assert_eq!(reference.file_url, MOCK_FILE_URL);
        assert_eq!(reference.key, MOCK_KEY);
        assert_eq!(store.create_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failing_store_rejects_every_operation() {
        let store = MockStore::failing("Erreur 404");

        let error = store.list().await.unwrap_err();
        assert_eq!(error.user_message(), "Erreur 404");

        let error = store
            .create(BillDraft::for_upload("a@a"), None)
            .await
            .unwrap_err();
        assert_eq!(error.user_message(), "Erreur 404");

        let error = store
            .update("1234", BillDraft::for_upload("a@a"))
            .await
            .unwrap_err();
        assert_eq!(error.user_message(), "Erreur 404");
    }

    #[tokio::test]
    async fn test_update_replaces_existing_record() {
        let store = MockStore::with_fixtures();

        let draft = BillDraft {
            email: "a@a".to_string(),
            name: Some("corrigé".to_string()),
            amount: Some(42.0),
            date: Some("2004-04-05".to_string()),
            status: Some(BillStatus::Pending),
            ..BillDraft::default()
        };
        store.update("47qAXb6fIm2zOKkLzMro", draft).await.unwrap();

        let bills = store.list().await.unwrap();
        assert_eq!(bills.len(), 4);
        let updated = bills
            .iter()
            .find(|b| b.id == "47qAXb6fIm2zOKkLzMro")
            .unwrap();
        assert_eq!(updated.name, "corrigé");
        assert_eq!(updated.amount, 42.0);
    }
}
