#[macro_export]
macro_rules! tvec {
    (@one $x:expr) => (1usize);
    ($elem:expr; $n:expr) => ({
        $crate::TVec::from_elem($elem, $n)
    });
    ($($x:expr),*$(,)*) => ({
        let count = 0usize $(+ $crate::tvec!(@one $x))*;
        #[allow(unused_mut)]
        let mut vec = $crate::TVec::new();
        if count <= vec.inline_size() {
            $(vec.push($x);)*
            vec
        } else {
            $crate::TVec::from_vec(vec![$($x,)*])
        }
    });
}

/// Build a `TensorShape` from anything convertible to `Dim`.
///
/// `shape![1, 3, "N"]` is `[1,3,N]`.
#[macro_export]
macro_rules! shape {
    ($($d:expr),*$(,)*) => ({
        $crate::prelude::TensorShape::from_dims($crate::tvec!($($crate::prelude::Dim::from($d)),*))
    });
}
