#[macro_use]
mod macros;

/// A Smallvec instantiation with 4 embeddable values.
///
/// Used for tensor dimensions: most shapes found in graph descriptions
/// have a rank of four or less.
pub type TVec<T> = smallvec::SmallVec<[T; 4]>;

pub mod prelude {
    pub use crate::TVec;
    pub use crate::datum::DatumType;
    pub use crate::dim::Dim;
    pub use crate::literal::Literal;
    pub use crate::shape::TensorShape;
    pub use crate::tensor::{Encoding, Tensor, TensorType};
    pub use crate::{shape, tvec};
}

pub mod internal {
    pub use crate::prelude::*;
    pub use smallvec as graphjson_smallvec;
}

mod datum;
mod dim;
mod literal;
mod shape;
mod tensor;
