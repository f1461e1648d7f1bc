//! Display adapters for generated text.
//!
//! Rendered fragments are spliced into a skeleton without building an
//! intermediate `Vec<String>`, and the same adapter formats artifact lists in
//! diagnostics.

/// Writes every item of `items` with `sep` between consecutive items.
pub struct Separated<I, S> {
    items: I,
    sep: S,
}

impl<I, S> std::fmt::Display for Separated<I, S>
where
    I: Iterator + Clone,
    I::Item: std::fmt::Display,
    S: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, item) in self.items.clone().enumerate() {
            if i > 0 {
                write!(f, "{}", self.sep)?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

pub trait SeparatedBy: Iterator + Clone + Sized {
    /// Nothing is written until the result is displayed, and displaying it
    /// twice writes the same text.
    #[inline]
    fn separated_by<S>(self, sep: S) -> Separated<Self, S> {
        Separated { items: self, sep }
    }
}

impl<I: Iterator + Clone> SeparatedBy for I {}
