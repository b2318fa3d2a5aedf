use std::sync::Arc;

use parking_lot::RwLock;

pub use crate::math::{Matrix4x4, MatrixError, SharedMatrix};
pub use crate::render::{
    AbstractContext, ShaderInputType, ShaderProgramInputs, UniformBinder, UniformValue,
};

pub type ArcRwLock<T> = Arc<RwLock<T>>;

pub fn arc_rw_lock_new<T>(object: T) -> ArcRwLock<T> {
    Arc::new(RwLock::new(object))
}
