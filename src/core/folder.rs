use super::Combiner;

/// The `Folder` trait encapsulates [the standard fold
/// operation][fold]. It can be fed many items using the `consume`
/// method. At the end, once all items have been consumed, it can then
/// be converted (using `complete`) into a final value.
///
/// [fold]: https://doc.rust-lang.org/std/iter/trait.Iterator.html#method.fold
pub trait Folder<Item>: Sized {
    /// The type of result that will ultimately be produced by the folder.
    type Result;

    /// Consume next item and return new sequential state.
    fn consume(self, item: Item) -> Self;

    /// Consume all items of the iterator and return new sequential state.
    fn consume_iter<I>(mut self, iter: I) -> Self
    where
        I: IntoIterator<Item = Item>,
    {
        for item in iter {
            self = self.consume(item);
        }

        self
    }

    /// Finish consuming items, produce final result.
    fn complete(self) -> Self::Result;
}

/* CombineFolder */

/// Left-to-right fold with a [`Combiner`]: the first item becomes the running
/// result, every following item is combined into it. Completes with the
/// default value of `T` if no item was consumed.
pub struct CombineFolder<'c, C: ?Sized, T> {
    combiner: &'c C,
    item: Option<T>,
    count: usize,
}

impl<'c, C: ?Sized, T> CombineFolder<'c, C, T> {
    pub fn new(combiner: &'c C) -> Self {
        Self {
            combiner,
            item: None,
            count: 0,
        }
    }

    /// Number of items consumed so far.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<'c, C, T> Folder<T> for CombineFolder<'c, C, T>
where
    C: Combiner<T> + ?Sized,
    T: Default,
{
    type Result = T;

    fn consume(mut self, item: T) -> Self {
        self.item = Some(match self.item.take() {
            Some(running) => self.combiner.combine(running, item),
            None => item,
        });
        self.count += 1;

        self
    }

    fn complete(self) -> Self::Result {
        self.item.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_folder_is_left_to_right() {
        let concat = |a: String, b: String| format!("({}{})", a, b);

        let folder = CombineFolder::new(&concat).consume_iter(vec![
            "a".to_owned(),
            "b".to_owned(),
            "c".to_owned(),
        ]);

        assert_eq!(3, folder.count());
        assert_eq!("((ab)c)", folder.complete());
    }

    #[test]
    fn test_combine_folder_single_item_is_not_combined() {
        let fail = |_: i32, _: i32| -> i32 { panic!("combined a single item") };

        assert_eq!(7, CombineFolder::new(&fail).consume(7).complete());
    }

    #[test]
    fn test_combine_folder_empty_is_default() {
        let add = |a: i32, b: i32| a + b;

        assert_eq!(0, CombineFolder::<_, i32>::new(&add).complete());
    }
}
