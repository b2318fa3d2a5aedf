pub mod matrix4x4;

pub use matrix4x4::{Matrix4x4, MatrixError};

use crate::prelude::{arc_rw_lock_new, ArcRwLock};

/// A matrix shared between several engine components (e.g. a scene node and
/// the system animating it). Writers take the lock one at a time.
pub type SharedMatrix = ArcRwLock<Matrix4x4>;

pub fn shared_matrix(matrix: Matrix4x4) -> SharedMatrix {
    arc_rw_lock_new(matrix)
}
