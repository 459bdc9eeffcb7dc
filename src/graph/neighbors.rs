use crate::types::VId;

/// An iterator visiting the neighbor ids of a vertex in ascending order.
///
/// Expanded graphs lend their adjacency slices, condensed graphs hand over the list
/// derived for this query.
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    inner: Inner<'a>,
}

#[derive(Debug, Clone)]
enum Inner<'a> {
    Borrowed(std::slice::Iter<'a, VId>),
    Owned(std::vec::IntoIter<VId>),
}

impl<'a> Neighbors<'a> {
    pub(crate) fn borrowed(ids: &'a [VId]) -> Self {
        Self {
            inner: Inner::Borrowed(ids.iter()),
        }
    }

    pub(crate) fn owned(ids: Vec<VId>) -> Self {
        Self {
            inner: Inner::Owned(ids.into_iter()),
        }
    }
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = VId;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Inner::Borrowed(iter) => iter.next().copied(),
            Inner::Owned(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Inner::Borrowed(iter) => iter.size_hint(),
            Inner::Owned(iter) => iter.size_hint(),
        }
    }
}

impl<'a> ExactSizeIterator for Neighbors<'a> {}
