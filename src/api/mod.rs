// Thin namespace wrapper for API-layer components
pub mod handlers {
    pub use crate::handlers::*;
}

pub mod social_links {
    pub use crate::social_links::*;
}
