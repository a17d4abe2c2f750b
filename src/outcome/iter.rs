use crate::outcome::core::Outcome;

pub struct Iter<'a, V> {
    inner: Option<&'a V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IterMut<'a, V> {
    inner: Option<&'a mut V>,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IntoIter<V> {
    inner: Option<V>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<V, E> IntoIterator for Outcome<V, E> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_value() }
    }
}

impl<'a, V, E> IntoIterator for &'a Outcome<V, E> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V, E> IntoIterator for &'a mut Outcome<V, E> {
    type Item = &'a mut V;
    type IntoIter = IterMut<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<V, E> Outcome<V, E> {
    /// Iterates over the success value, yielding it at most once.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { inner: self.value() }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        match self {
            Outcome::Success(value) => IterMut { inner: Some(value) },
            Outcome::Failure(_) => IterMut { inner: None },
        }
    }
}

/// Collects success values until the first failure.
///
/// Items are pulled left to right. The first `Failure` stops iteration and
/// becomes the result; no later item is pulled, so lazily produced steps after
/// it never run. Errors are never accumulated.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Error, Outcome};
///
/// let all: Outcome<Vec<i32>> = vec![Outcome::success(1), Outcome::success(2)]
///     .into_iter()
///     .collect();
/// assert_eq!(all.into_value(), Some(vec![1, 2]));
///
/// let first_bad: Outcome<Vec<i32>> = vec![
///     Outcome::success(1),
///     Outcome::failure(Error::new("ERR_A")),
///     Outcome::failure(Error::new("ERR_B")),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(first_bad.error().map(Error::code), Some("ERR_A"));
/// ```
impl<V, E, C> FromIterator<Outcome<V, E>> for Outcome<C, E>
where
    C: FromIterator<V>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<V, E>>>(iter: I) -> Self {
        let mut failed = None;
        let values: C = iter
            .into_iter()
            .map_while(|item| match item {
                Outcome::Success(value) => Some(value),
                Outcome::Failure(error) => {
                    failed = Some(error);
                    None
                },
            })
            .collect();

        match failed {
            Some(error) => Outcome::Failure(error),
            None => Outcome::Success(values),
        }
    }
}
