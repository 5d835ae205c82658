/// Types with a least and a greatest value, usable as heap sentinels.
///
/// Neither bound can be inserted into a heap guarded by it, so an integer
/// min-heap over `i32` accepts everything except `i32::MIN`.
pub trait Bounded {
    fn lowest() -> Self;
    fn highest() -> Self;
}

macro_rules! bounded_float {
    ($($t:ty),*) => {
        $(
            impl Bounded for $t {
                fn lowest() -> Self {
                    <$t>::NEG_INFINITY
                }

                fn highest() -> Self {
                    <$t>::INFINITY
                }
            }
        )*
    };
}

macro_rules! bounded_int {
    ($($t:ty),*) => {
        $(
            impl Bounded for $t {
                fn lowest() -> Self {
                    <$t>::MIN
                }

                fn highest() -> Self {
                    <$t>::MAX
                }
            }
        )*
    };
}

bounded_float!(f32, f64);
bounded_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Which end of the ordering rises to the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Min,
    Max,
}

impl Kind {
    /// The value parked at position 0: the bound no live element may reach.
    pub fn sentinel<T: Bounded>(self) -> T {
        match self {
            Kind::Min => T::lowest(),
            Kind::Max => T::highest(),
        }
    }

    /// `order(a, b)` holds when `a` may sit above `b`.
    pub fn order<T: PartialOrd>(self) -> fn(&T, &T) -> bool {
        match self {
            Kind::Min => min_order::<T>,
            Kind::Max => max_order::<T>,
        }
    }
}

fn min_order<T: PartialOrd>(a: &T, b: &T) -> bool {
    a <= b
}

fn max_order<T: PartialOrd>(a: &T, b: &T) -> bool {
    a >= b
}
