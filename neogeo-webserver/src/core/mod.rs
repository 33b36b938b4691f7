pub use neogeo_core::{repositories, usecases};

pub mod entities {
    pub use neogeo_core::entities::*;
    #[cfg(test)]
    pub use neogeo_entities::builders::*;
}

pub mod prelude {
    pub use super::entities::*;
}
