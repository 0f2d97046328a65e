/// Collaboration avec l'enveloppe applicative: routage et surface de vue
pub mod router;
pub mod view;

pub use router::{NavIcon, NavigationHandle, RoutePath, Router};
pub use view::ViewSurface;
