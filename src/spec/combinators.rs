//! Core specification trait and the conjunction combinator
//!
//! This module provides the foundational `Spec` trait and the flat
//! conjunction combinator for composing specifications.

use std::fmt;

/// A composable specification over values of type T.
///
/// A specification answers one question: does this item satisfy me?
/// Evaluation is pure and total - no side effects, and an answer for every
/// item.
///
/// Specifications compose through conjunction: [`all`] and
/// [`SpecExt::and`] build an [`All`] whose clause list stays flat no matter
/// how the pieces were grouped.
///
/// # Example
///
/// ```rust
/// use millrace::spec::{Spec, SpecExt};
///
/// let in_range = (|x: &i32| *x > 0).and(|x: &i32| *x < 100);
/// assert!(in_range.is_satisfied(&50));
/// assert!(!in_range.is_satisfied(&-5));
/// ```
pub trait Spec<T: ?Sized>: Send + Sync {
    /// Check whether the item satisfies this specification.
    fn is_satisfied(&self, item: &T) -> bool;

    /// Fold this specification into a flat clause list.
    ///
    /// Leaf specifications push themselves; [`All`] overrides this to splice
    /// its children, which is what keeps repeated combination one level deep.
    fn flatten_into(self, clauses: &mut Vec<Box<dyn Spec<T>>>)
    where
        Self: Sized + 'static,
        T: 'static,
    {
        clauses.push(Box::new(self));
    }
}

// Blanket impl for closures
impl<T: ?Sized, F> Spec<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        self(item)
    }
}

/// Extension trait for fluent conjunction.
///
/// Provides method chaining so `a.and(b).and(c)` reads like the composition
/// it builds. The result is always a flat [`All`]: combining with an
/// existing composite splices its clauses instead of nesting it.
///
/// # Example
///
/// ```rust
/// use millrace::spec::{Spec, SpecExt};
///
/// let p = (|x: &i32| *x > 0).and(|x: &i32| *x < 10).and(|x: &i32| x % 2 == 0);
/// assert_eq!(p.clauses(), 3);
/// assert!(p.is_satisfied(&4));
/// assert!(!p.is_satisfied(&5));
/// ```
pub trait SpecExt<T: ?Sized>: Spec<T> + Sized {
    /// Combine with AND logic.
    ///
    /// Returns a composite that is satisfied only when both specifications
    /// are satisfied. Evaluation short-circuits on the first failing clause.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millrace::catalog::{Color, Product, Size};
    /// use millrace::spec::{color_is, size_is, Spec, SpecExt};
    ///
    /// let large_green = size_is(Size::Large).and(color_is(Color::Green));
    /// let p = Product::new("Pants", Color::Green, Size::Large);
    /// assert!(large_green.is_satisfied(&p));
    /// ```
    fn and<S>(self, other: S) -> All<T>
    where
        Self: 'static,
        S: Spec<T> + 'static,
        T: 'static,
    {
        all(self, other)
    }
}

impl<T: ?Sized, S: Spec<T>> SpecExt<T> for S {}

/// Conjunction combinator - all clauses must be satisfied.
///
/// Holds an ordered, flat list of child specifications. Evaluation walks the
/// clauses in construction order and short-circuits on the first failure.
/// The clause list is never empty: the only ways to build an `All` are
/// [`all`], which takes two specifications, and [`All::and`], which adds
/// more.
///
/// # Example
///
/// ```rust
/// use millrace::catalog::{Color, Product, Size};
/// use millrace::spec::{all, color_is, kind_is, size_is, Spec};
///
/// let spec = all(size_is(Size::Large), all(kind_is("Pants"), color_is(Color::Green)));
/// // Nested composites are spliced, not nested.
/// assert_eq!(spec.clauses(), 3);
///
/// let p = Product::new("Pants", Color::Green, Size::Large);
/// assert!(spec.is_satisfied(&p));
/// ```
pub struct All<T: ?Sized + 'static> {
    clauses: Vec<Box<dyn Spec<T>>>,
}

impl<T: ?Sized + 'static> All<T> {
    /// Append another clause, splicing if it is itself a composite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millrace::spec::{all, Spec};
    ///
    /// let p = all(|x: &i32| *x > 0, |x: &i32| *x < 100).and(|x: &i32| x % 2 == 0);
    /// assert_eq!(p.clauses(), 3);
    /// assert!(p.is_satisfied(&42));
    /// assert!(!p.is_satisfied(&43));
    /// ```
    pub fn and<S>(mut self, next: S) -> Self
    where
        S: Spec<T> + 'static,
    {
        next.flatten_into(&mut self.clauses);
        self
    }

    /// Number of clauses in this composite (always at least two).
    pub fn clauses(&self) -> usize {
        self.clauses.len()
    }
}

impl<T: ?Sized + 'static> Spec<T> for All<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.clauses.iter().all(|clause| clause.is_satisfied(item))
    }

    fn flatten_into(self, clauses: &mut Vec<Box<dyn Spec<T>>>)
    where
        Self: Sized + 'static,
        T: 'static,
    {
        clauses.extend(self.clauses);
    }
}

impl<T: ?Sized + 'static> fmt::Debug for All<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("All")
            .field("clauses", &self.clauses.len())
            .finish()
    }
}

/// Combine two specifications into a flat conjunction.
///
/// Either input may already be a composite; its clauses are spliced into the
/// result rather than nested, so repeated combination keeps evaluation O(n)
/// over a single flat list.
///
/// # Example
///
/// ```rust
/// use millrace::spec::{all, Spec};
///
/// let left = all(|x: &i32| *x > 0, |x: &i32| *x < 100);
/// let right = all(|x: &i32| x % 2 == 0, |x: &i32| x % 3 == 0);
/// let combined = all(left, right);
/// assert_eq!(combined.clauses(), 4);
/// assert!(combined.is_satisfied(&6));
/// assert!(!combined.is_satisfied(&8));
/// ```
pub fn all<T, A, B>(first: A, second: B) -> All<T>
where
    T: ?Sized + 'static,
    A: Spec<T> + 'static,
    B: Spec<T> + 'static,
{
    let mut clauses = Vec::with_capacity(2);
    first.flatten_into(&mut clauses);
    second.flatten_into(&mut clauses);
    All { clauses }
}
