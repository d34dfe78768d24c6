pub mod annotation;

pub use annotation::{AnnotateImageResponse, BatchAnnotateResponse, LogoAnnotation, RpcStatus};
