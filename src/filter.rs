//! Stable filtering of entity sequences
//!
//! The filter applies one specification - simple or composite, handed in
//! through the [`Spec`] capability - to an ordered slice of entities and
//! returns references to the entities that satisfy it, in their original
//! relative order. Nothing is copied and nothing is mutated; the result
//! borrows from the input.

use crate::spec::Spec;

/// Select the entities satisfying `spec`, preserving input order.
///
/// The output is always a subsequence of `items`: each matching entity
/// appears exactly once, by reference, in the same relative position. The
/// output may be empty. Filtering is deterministic - specifications are pure,
/// so the same inputs always produce the same output.
///
/// `spec` may be unsized, so `&dyn Spec<T>` works as well as any concrete
/// specification.
///
/// # Example
///
/// ```rust
/// use millrace::catalog::{Color, Product, Size};
/// use millrace::filter::filter;
/// use millrace::spec::color_is;
///
/// let products = vec![
///     Product::new("Shirt", Color::Green, Size::Small),
///     Product::new("Pants", Color::Blue, Size::Large),
///     Product::new("Socks", Color::Green, Size::Medium),
/// ];
///
/// let green = filter(&products, &color_is(Color::Green));
/// let kinds: Vec<&str> = green.iter().map(|p| p.kind()).collect();
/// assert_eq!(kinds, vec!["Shirt", "Socks"]);
/// ```
pub fn filter<'a, T, S>(items: &'a [T], spec: &S) -> Vec<&'a T>
where
    S: Spec<T> + ?Sized,
{
    let matched: Vec<&T> = items.iter().filter(|item| spec.is_satisfied(item)).collect();
    #[cfg(feature = "tracing")]
    tracing::debug!(
        scanned = items.len(),
        matched = matched.len(),
        "filter pass complete"
    );
    matched
}

/// Lazily iterate over the entities satisfying `spec`, in input order.
///
/// Same semantics as [`filter`] without collecting; useful when the caller
/// only needs to stream matches.
///
/// # Example
///
/// ```rust
/// use millrace::catalog::{Color, Product, Size};
/// use millrace::filter::matching;
/// use millrace::spec::kind_is;
///
/// let products = vec![
///     Product::new("Shirt", Color::Green, Size::Small),
///     Product::new("Pants", Color::Blue, Size::Large),
/// ];
///
/// let spec = kind_is("Pants");
/// let mut pants = matching(&products, &spec);
/// assert_eq!(pants.next().map(|p| p.kind()), Some("Pants"));
/// assert_eq!(pants.next(), None);
/// ```
pub fn matching<'a, T, S>(items: &'a [T], spec: &'a S) -> impl Iterator<Item = &'a T> + 'a
where
    S: Spec<T> + ?Sized,
{
    items.iter().filter(move |item| spec.is_satisfied(item))
}
