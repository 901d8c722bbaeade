// Domain-layer modules and shared errors/models
pub mod identifier {
    pub use crate::identifier::*;
}

pub mod resolver {
    pub use crate::resolver::*;
}

pub mod head {
    pub use crate::head::*;
}

pub mod models {
    pub use crate::models::*;
}

pub mod errors {
    pub use crate::errors::*;
}
