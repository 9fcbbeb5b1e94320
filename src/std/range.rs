use std::ops::Range;
use std::sync::Mutex;

use crate::{misc::lock, IntoSequence, Sequence};

/// Sequence over a range of integers.
#[derive(Debug)]
pub struct RangeSequence<T> {
    range: Mutex<Range<T>>,
}

impl<T> RangeSequence<T> {
    pub fn new(range: Range<T>) -> Self {
        Self {
            range: Mutex::new(range),
        }
    }
}

macro_rules! range_sequence {
    ($($t:ty),*) => {
        $(
            impl IntoSequence for Range<$t> {
                type Item = $t;
                type Seq = RangeSequence<$t>;

                fn into_seq(self) -> Self::Seq {
                    RangeSequence::new(self)
                }
            }

            impl Sequence for RangeSequence<$t> {
                type Item = $t;

                fn pull(&self) -> Option<Self::Item> {
                    lock(&self.range).next()
                }
            }
        )*
    };
}

range_sequence!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_range_sequence() {
        assert_eq!((0..4usize).into_seq().to_vec(), [0, 1, 2, 3]);
        assert_eq!((3..3u8).into_seq().to_vec(), Vec::<u8>::new());
        assert_eq!((-2..1i64).into_seq().to_vec(), [-2, -1, 0]);
    }
}
