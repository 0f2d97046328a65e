/// Surface de vue pilotée par les conteneurs
///
/// Les gabarits HTML possèdent le DOM; les conteneurs ne déclenchent que ces
/// quelques effets. Une implémentation démontée entre-temps doit ignorer les
/// appels tardifs plutôt que d'échouer.
pub trait ViewSurface: Send + Sync {
    /// Affiche un message d'erreur tel quel (« Erreur 404 », « Erreur 500 », ...)
    fn render_error(&self, message: &str);

    /// Ouvre l'aperçu (modale) d'un justificatif
    fn open_receipt_preview(&self, file_url: &str, file_name: &str);

    /// Vide le champ fichier du formulaire de nouvelle note
    fn clear_file_input(&self);
}

#[cfg(test)]
pub use recorded::RecordedView;
