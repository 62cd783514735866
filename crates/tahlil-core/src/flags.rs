// Small enum-keyed bit sets.
//
// Phonetic attributes, phonetic expectations and lexeme attributes are all
// closed enums with fewer than 64 members. Sets of them are stored as a
// single `u64`, which doubles as their interned key: equality and hashing
// are integer operations.

use std::fmt;
use std::marker::PhantomData;

/// An enum usable as a member of a [`FlagSet`].
pub trait Flag: Copy + Eq + fmt::Debug + 'static {
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// Bit position of this member, `0..64`.
    fn bit(self) -> u32;
}

pub struct FlagSet<T: Flag> {
    bits: u64,
    _marker: PhantomData<T>,
}

impl<T: Flag> FlagSet<T> {
    pub const fn empty() -> Self {
        Self {
            bits: 0,
            _marker: PhantomData,
        }
    }

    pub const fn from_bits(bits: u64) -> Self {
        Self {
            bits,
            _marker: PhantomData,
        }
    }

    pub fn of(members: &[T]) -> Self {
        members.iter().copied().collect()
    }

    pub const fn bits(&self) -> u64 {
        self.bits
    }

    pub fn contains(&self, flag: T) -> bool {
        self.bits & (1 << flag.bit()) != 0
    }

    pub fn contains_any(&self, other: Self) -> bool {
        self.bits & other.bits != 0
    }

    pub fn contains_all(&self, other: Self) -> bool {
        self.bits & other.bits == other.bits
    }

    pub fn insert(&mut self, flag: T) {
        self.bits |= 1 << flag.bit();
    }

    pub fn remove(&mut self, flag: T) {
        self.bits &= !(1 << flag.bit());
    }

    pub fn with(mut self, flag: T) -> Self {
        self.insert(flag);
        self
    }

    pub fn without(mut self, flag: T) -> Self {
        self.remove(flag);
        self
    }

    pub fn union(self, other: Self) -> Self {
        Self::from_bits(self.bits | other.bits)
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        T::ALL.iter().copied().filter(|f| self.contains(*f))
    }
}

// Manual impls: deriving would put bounds on `T` that `PhantomData` does
// not need.
impl<T: Flag> Clone for FlagSet<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Flag> Copy for FlagSet<T> {}

impl<T: Flag> PartialEq for FlagSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<T: Flag> Eq for FlagSet<T> {}

impl<T: Flag> std::hash::Hash for FlagSet<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<T: Flag> Default for FlagSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Flag> fmt::Debug for FlagSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Flag> FromIterator<T> for FlagSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::empty();
        for f in iter {
            set.insert(f);
        }
        set
    }
}

impl<T: Flag> Extend<T> for FlagSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for f in iter {
            self.insert(f);
        }
    }
}
