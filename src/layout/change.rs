//! Change detection between label sets

/// Whether two label sequences are identical, element by element.
///
/// Reordering or any single differing label counts as a change.
pub fn is_same<A, B>(new: &[A], previous: &[B]) -> bool
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    new.len() == previous.len()
        && new
            .iter()
            .zip(previous)
            .all(|(a, b)| a.as_ref() == b.as_ref())
}
