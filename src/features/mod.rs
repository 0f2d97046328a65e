/// Modules par fonctionnalité
///
/// Chaque module appaire une vue et sa logique: récupération et mise en
/// forme des données, validation des saisies, soumission.
pub mod bills;
pub mod new_bill;
