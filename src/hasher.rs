//! Key hashing policies for [`HashMap`](crate::HashMap).
//!
//! A hash map picks the bucket of a key from the `u64` its [`KeyHasher`] returns, then tells keys
//! in the same bucket apart with [`Eq`]. Three kinds of hasher are provided:
//!
//! - [`Natural`], which uses the [`DefaultHash`] value of primitive keys. Integers hash to
//!   themselves, so their bucket placement is predictable.
//! - [`BuildHasherAdapter`], which feeds any [`Hash`] key through a [`BuildHasher`] (by default
//!   `rustc_hash::FxBuildHasher`).
//! - Any `Fn(&K) -> u64`.
//!
//! ```
//! use mapkit::{HashMap, Map};
//!
//! let mut map = HashMap::with_hasher(|key: &(u8, u8)| u64::from(key.0) * 256 + u64::from(key.1));
//! map.put((1, 2), "a");
//! assert_eq!(map.get(&(1, 2)), Some(&"a"));
//! ```

use alloc::string::String;
use core::hash::{BuildHasher, Hash};

#[cfg(feature = "complex")]
use num_complex::Complex;
use rustc_hash::FxBuildHasher;

pub use crate::comparator::Natural;

/// Computes the hash used to place a key in a bucket.
///
/// Keys that are equal under [`Eq`] must hash to the same value.
pub trait KeyHasher<K: ?Sized> {
    /// Hashes `key`.
    fn hash(&self, key: &K) -> u64;
}

impl<K: ?Sized, F> KeyHasher<K> for F
where
    F: Fn(&K) -> u64,
{
    #[inline]
    fn hash(&self, key: &K) -> u64 {
        self(key)
    }
}

impl<K: DefaultHash + ?Sized> KeyHasher<K> for Natural {
    #[inline]
    fn hash(&self, key: &K) -> u64 {
        key.default_hash()
    }
}

/// The built-in hash of a primitive key type.
///
/// Integers hash to their own value (sign-extended to 64 bits), `bool` to 1 or 0, `char` to its
/// scalar value, floats to their value truncated toward zero, complex numbers to the sum of their
/// truncated parts and strings to their 32-bit FNV-1a digest.
pub trait DefaultHash {
    /// Returns the hash of `self`.
    fn default_hash(&self) -> u64;
}

macro_rules! default_hash_by_value {
    ($($t:ty)*) => {
        $(
            impl DefaultHash for $t {
                #[inline]
                #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation, clippy::cast_lossless)]
                fn default_hash(&self) -> u64 {
                    *self as u64
                }
            }
        )*
    };
}

macro_rules! default_hash_signed {
    ($($t:ty)*) => {
        $(
            impl DefaultHash for $t {
                #[inline]
                #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation, clippy::cast_lossless)]
                fn default_hash(&self) -> u64 {
                    *self as i64 as u64
                }
            }
        )*
    };
}

default_hash_by_value!(u8 u16 u32 u64 u128 usize);
default_hash_signed!(i8 i16 i32 i64 i128 isize);

impl DefaultHash for bool {
    #[inline]
    fn default_hash(&self) -> u64 {
        u64::from(*self)
    }
}

impl DefaultHash for char {
    #[inline]
    fn default_hash(&self) -> u64 {
        u64::from(u32::from(*self))
    }
}

impl DefaultHash for f32 {
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn default_hash(&self) -> u64 {
        *self as i64 as u64
    }
}

impl DefaultHash for f64 {
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn default_hash(&self) -> u64 {
        *self as i64 as u64
    }
}

#[cfg(feature = "complex")]
impl DefaultHash for Complex<f32> {
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn default_hash(&self) -> u64 {
        (self.re as i64).wrapping_add(self.im as i64) as u64
    }
}

#[cfg(feature = "complex")]
impl DefaultHash for Complex<f64> {
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn default_hash(&self) -> u64 {
        (self.re as i64).wrapping_add(self.im as i64) as u64
    }
}

impl DefaultHash for str {
    #[inline]
    fn default_hash(&self) -> u64 {
        u64::from(fnv1a_32(self.as_bytes()))
    }
}

impl DefaultHash for String {
    #[inline]
    fn default_hash(&self) -> u64 {
        self.as_str().default_hash()
    }
}

impl<T: DefaultHash + ?Sized> DefaultHash for &T {
    #[inline]
    fn default_hash(&self) -> u64 {
        (**self).default_hash()
    }
}

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

const fn fnv1a_32(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

/// Hashes any [`Hash`] key with a [`BuildHasher`].
///
/// ```
/// use mapkit::hasher::BuildHasherAdapter;
/// use mapkit::{HashMap, Map};
///
/// #[derive(Hash, PartialEq, Eq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let mut map = HashMap::with_hasher(BuildHasherAdapter::default());
/// map.put(Point { x: 1, y: 2 }, "here");
/// assert!(map.contains_key(&Point { x: 1, y: 2 }));
/// ```
#[derive(Clone, Debug)]
pub struct BuildHasherAdapter<S = FxBuildHasher> {
    build_hasher: S,
}

impl Default for BuildHasherAdapter {
    /// Wraps [`FxBuildHasher`]. Other builders go through [`new`](BuildHasherAdapter::new).
    fn default() -> Self {
        Self::new(FxBuildHasher)
    }
}

impl<S> BuildHasherAdapter<S> {
    /// Wraps `build_hasher`.
    pub const fn new(build_hasher: S) -> Self {
        Self { build_hasher }
    }

    /// Returns the wrapped [`BuildHasher`].
    pub const fn build_hasher(&self) -> &S {
        &self.build_hasher
    }
}

impl<K: Hash + ?Sized, S: BuildHasher> KeyHasher<K> for BuildHasherAdapter<S> {
    #[inline]
    fn hash(&self, key: &K) -> u64 {
        self.build_hasher.hash_one(key)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn hashed_by<H: KeyHasher<K>, K: ?Sized>(hasher: &H, key: &K) -> u64 {
        hasher.hash(key)
    }

    #[test]
    fn integers_hash_to_themselves() {
        assert_eq!(hashed_by(&Natural, &129_i32), 129);
        assert_eq!(hashed_by(&Natural, &7_u8), 7);
        assert_eq!(hashed_by(&Natural, &-1_i64), u64::MAX);
    }

    #[test]
    fn scalar_defaults() {
        assert_eq!(true.default_hash(), 1);
        assert_eq!(false.default_hash(), 0);
        assert_eq!('A'.default_hash(), 65);
        assert_eq!(3.9_f64.default_hash(), 3);
        assert_eq!((-2.5_f32).default_hash(), (-2_i64) as u64);
    }

    #[test]
    fn strings_use_fnv1a() {
        // Reference digests of 32-bit FNV-1a.
        assert_eq!("".default_hash(), 0x811c_9dc5);
        assert_eq!("a".default_hash(), 0xe40c_292c);
        assert_eq!("foobar".default_hash(), 0xbf9c_f968);
        assert_eq!(String::from("foobar").default_hash(), "foobar".default_hash());
        assert_eq!(hashed_by(&Natural, &"foobar"), 0xbf9c_f968);
    }

    #[cfg(feature = "complex")]
    #[test]
    fn complex_sums_truncated_parts() {
        assert_eq!(Complex::new(1.7_f64, 2.2).default_hash(), 3);
        assert_eq!(Complex::new(-4.0_f32, 1.0).default_hash(), (-3_i64) as u64);
    }

    #[test]
    fn build_hasher_adapter_is_deterministic() {
        let adapter = BuildHasherAdapter::<FxBuildHasher>::default();
        assert_eq!(hashed_by(&adapter, "key"), hashed_by(&adapter, "key"));
        assert_eq!(hashed_by(&adapter, &(1, 2)), hashed_by(&adapter, &(1, 2)));
    }

    #[test]
    fn closures_are_hashers() {
        let by_length = |key: &str| key.len() as u64;
        assert_eq!(hashed_by(&by_length, "four"), 4);
    }
}
