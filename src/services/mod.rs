pub mod crud;
pub mod patch;
pub mod upload;

pub use crud::CrudService;
pub use patch::Merge;
pub use upload::{CloudinaryStorage, ObjectStorage, UploadError, UploadFile};
