use crate::shared::config::{UserSession, UserType};
use log::warn;
use std::sync::Arc;

/// Chemins de navigation de l'application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePath {
    /// Écran de connexion
    Login,
    /// Liste « Mes notes de frais »
    Bills,
    /// Formulaire « Envoyer une note de frais »
    NewBill,
    /// Tableau de bord administrateur
    Dashboard,
}

impl RoutePath {
    /// Fragment d'URL associé à la route
    pub fn fragment(&self) -> &'static str {
        match self {
            RoutePath::Login => "/",
            RoutePath::Bills => "#employee/bills",
            RoutePath::NewBill => "#employee/bill/new",
            RoutePath::Dashboard => "#admin/dashboard",
        }
    }

    /// Route correspondant à un fragment d'URL, si elle existe
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        match fragment {
            "" | "/" => Some(RoutePath::Login),
            "#employee/bills" => Some(RoutePath::Bills),
            "#employee/bill/new" => Some(RoutePath::NewBill),
            "#admin/dashboard" => Some(RoutePath::Dashboard),
            _ => None,
        }
    }

    /// Rôle requis pour accéder à la route (None: accès libre)
    pub fn required_role(&self) -> Option<UserType> {
        match self {
            RoutePath::Login => None,
            RoutePath::Bills | RoutePath::NewBill => Some(UserType::Employee),
            RoutePath::Dashboard => Some(UserType::Admin),
        }
    }

    /// Icône de navigation mise en surbrillance quand la route est active
    pub fn active_icon(&self) -> Option<NavIcon> {
        match self {
            RoutePath::Bills => Some(NavIcon::Window),
            RoutePath::NewBill => Some(NavIcon::Mail),
            _ => None,
        }
    }
}

/// Icônes de la barre de navigation verticale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Window,
    Mail,
}

/// Fonction de navigation injectée dans les conteneurs
///
/// Le rendu effectif de la vue appartient à la couche appelante; les
/// conteneurs ne connaissent que cette valeur.
pub type NavigationHandle = Arc<dyn Fn(RoutePath) + Send + Sync>;

/// Routeur: résout le fragment courant et applique la redirection par rôle
pub struct Router {
    session: Option<UserSession>,
}

impl Router {
    /// Construit le routeur avec la session lue au démarrage
    pub fn new(session: Option<UserSession>) -> Self {
        Self { session }
    }

    /// Résout un fragment d'URL vers la route à rendre
    ///
    /// Un fragment inconnu, un accès non authentifié ou un rôle inadapté
    /// sont redirigés vers l'écran de connexion.
    pub fn resolve(&self, fragment: &str) -> RoutePath {
        let Some(route) = RoutePath::from_fragment(fragment) else {
            warn!("fragment inconnu « {fragment} », redirection vers la connexion");
            return RoutePath::Login;
        };

        match route.required_role() {
            None => route,
            Some(required) => match &self.session {
                Some(session) if session.user_type == required => route,
                _ => {
                    warn!("accès refusé à {fragment}, redirection vers la connexion");
                    RoutePath::Login
                }
            },
        }
    }
}
