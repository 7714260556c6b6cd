pub mod gallery;
pub mod home;
pub mod modal_add_image;

pub use gallery::Gallery;
pub use home::HomeScreen;
pub use modal_add_image::ModalAddImage;
