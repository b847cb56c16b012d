pub mod formats {
    pub use ard_formats::*;
}

pub mod log {
    pub use ard_log::*;
}

pub mod save_load {
    pub use ard_save_load::*;
}

pub mod textures {
    pub use ard_textures::*;
}

pub mod prelude {
    pub use ard_formats::texture::*;
    pub use ard_save_load::prelude::*;
    pub use ard_textures::prelude::*;
}
