//! Index new-types and the vectors they index.
//!
//! Every analysis keeps per-node or per-edge side arrays (discovery orders,
//! low-links, labels, residuals). Giving each kind of index its own type and
//! its own vector makes it a type error to look up a node array with an edge.

/// Defines an index new-type `$Idx(pub usize)` and a vector `$Vec<T>` that only
/// accepts `$Idx` in `Index`/`IndexMut` and yields it when iterated.
#[macro_export]
macro_rules! define_indexed_vec {
    (
        $(#[$idx_meta:meta])*
        $idx_vis:vis struct $Idx:ident ;

        $(#[$vec_meta:meta])*
        $vec_vis:vis struct $Vec:ident ;
    ) => {
        $(#[$idx_meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $idx_vis struct $Idx(pub usize);

        impl ::std::convert::From<usize> for $Idx {
            fn from(value: usize) -> Self {
                $Idx(value)
            }
        }

        impl ::std::convert::From<$Idx> for usize {
            fn from(value: $Idx) -> Self {
                value.0
            }
        }

        impl ::std::fmt::Display for $Idx {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        $(#[$vec_meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vec_vis struct $Vec<T>(::std::vec::Vec<T>);

        impl<T> ::std::ops::Index<$Idx> for $Vec<T> {
            type Output = T;

            #[inline]
            fn index(&self, index: $Idx) -> &T {
                &self.0[index.0]
            }
        }

        impl<T> ::std::ops::IndexMut<$Idx> for $Vec<T> {
            #[inline]
            fn index_mut(&mut self, index: $Idx) -> &mut T {
                &mut self.0[index.0]
            }
        }

        impl<T> $Vec<T> {
            pub fn new() -> Self {
                $Vec(::std::vec::Vec::new())
            }

            pub fn with_capacity(capacity: usize) -> Self {
                $Vec(::std::vec::Vec::with_capacity(capacity))
            }

            /// `len` copies of `value`.
            pub fn filled(len: usize, value: T) -> Self
            where
                T: Clone,
            {
                $Vec(::std::vec![value; len])
            }

            #[inline]
            pub fn len(&self) -> usize {
                self.0.len()
            }

            #[inline]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Appends `value` and returns its index.
            pub fn push(&mut self, value: T) -> $Idx {
                self.0.push(value);
                $Idx(self.0.len() - 1)
            }

            #[inline]
            pub fn get(&self, index: $Idx) -> Option<&T> {
                self.0.get(index.0)
            }

            pub fn indices(
                &self,
            ) -> impl Iterator<Item = $Idx> + DoubleEndedIterator + ExactSizeIterator {
                (0..self.0.len()).map($Idx)
            }

            /// `(index, value)` pairs in index order.
            pub fn iter(&self) -> impl Iterator<Item = ($Idx, &T)> + '_ {
                self.0.iter().enumerate().map(|(i, t)| ($Idx(i), t))
            }

            pub fn values(&self) -> ::std::slice::Iter<'_, T> {
                self.0.iter()
            }

            pub fn into_raw(self) -> ::std::vec::Vec<T> {
                self.0
            }
        }

        impl<T> ::std::iter::FromIterator<T> for $Vec<T> {
            fn from_iter<I: ::std::iter::IntoIterator<Item = T>>(iter: I) -> Self {
                $Vec(iter.into_iter().collect())
            }
        }

        impl<T> ::std::convert::From<::std::vec::Vec<T>> for $Vec<T> {
            fn from(raw: ::std::vec::Vec<T>) -> Self {
                $Vec(raw)
            }
        }

        impl<'a, T> ::std::iter::IntoIterator for &'a $Vec<T> {
            type Item = ($Idx, &'a T);
            type IntoIter = ::std::iter::Map<
                ::std::iter::Enumerate<::std::slice::Iter<'a, T>>,
                fn((usize, &'a T)) -> ($Idx, &'a T),
            >;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter().enumerate().map(|(i, t)| ($Idx(i), t))
            }
        }
    };
}
