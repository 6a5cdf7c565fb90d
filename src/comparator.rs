//! Key ordering policies for the comparator-based maps.
//!
//! [`BinaryTreeMap`](crate::BinaryTreeMap) and [`FlatMap`](crate::FlatMap) never compare keys
//! directly. They ask the [`Comparator`] they were constructed with, so any key type can be used
//! as long as something can put it in a total order.
//!
//! Any `Fn(&K, &K) -> Ordering` is a comparator:
//!
//! ```
//! use core::cmp::Ordering;
//! use mapkit::{FlatMap, Map};
//!
//! let mut map = FlatMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
//! map.put(1, "one");
//! map.put(3, "three");
//! map.put(2, "two");
//! assert_eq!(map.keys(), [&3, &2, &1]);
//! ```

use core::cmp::Ordering;

#[cfg(feature = "complex")]
use num_complex::Complex;

/// A three-way comparison of two keys.
///
/// Implementations must describe a total order: the maps rely on `compare(a, b) == Equal`
/// meaning "same key" and on transitivity to keep their ordering invariant.
pub trait Comparator<K: ?Sized> {
    /// Compares `a` against `b`.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// The natural policy: [`Ord`] for ordering and [`DefaultHash`](crate::hasher::DefaultHash) for
/// hashing.
///
/// This is the policy used by the `new()` constructors.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Natural;

impl<K: Ord + ?Sized> Comparator<K> for Natural {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Orders `f32` keys: equal values are `Equal`, a smaller `a` is `Less`, anything else
/// (including NaN on either side) is `Greater`.
///
/// ```
/// use core::cmp::Ordering;
/// use mapkit::comparator::compare_f32;
///
/// assert_eq!(compare_f32(&1.0, &2.0), Ordering::Less);
/// assert_eq!(compare_f32(&0.0, &-0.0), Ordering::Equal);
/// ```
#[must_use]
#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn compare_f32(a: &f32, b: &f32) -> Ordering {
    order_partial(a, b)
}

/// Orders `f64` keys the same way as [`compare_f32`].
#[must_use]
#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn compare_f64(a: &f64, b: &f64) -> Ordering {
    order_partial(a, b)
}

/// Orders single-precision complex keys by their real part only.
///
/// Two values with the same real part compare `Equal` and therefore count as the same key.
#[cfg(feature = "complex")]
#[must_use]
pub fn compare_complex32(a: &Complex<f32>, b: &Complex<f32>) -> Ordering {
    order_partial(&a.re, &b.re)
}

/// Orders double-precision complex keys by their real part only.
#[cfg(feature = "complex")]
#[must_use]
pub fn compare_complex64(a: &Complex<f64>, b: &Complex<f64>) -> Ordering {
    order_partial(&a.re, &b.re)
}

fn order_partial<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    if a == b {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}
