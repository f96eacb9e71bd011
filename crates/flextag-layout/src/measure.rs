//! The one capability layout needs from a tag: its preferred size.

use std::rc::Rc;
use std::sync::Arc;

use flextag_core::Size;

/// Anything that can report a preferred size for a width budget.
///
/// `measure` must be idempotent for a fixed `max_width`. The returned width
/// may exceed `max_width`; such an item is placed alone on its own row at its
/// intrinsic width.
pub trait Measure {
    fn measure(&self, max_width: f64) -> Size;
}

/// A size is its own measurement, whatever the budget.
impl Measure for Size {
    fn measure(&self, _max_width: f64) -> Size {
        *self
    }
}

impl<T: Measure + ?Sized> Measure for &T {
    fn measure(&self, max_width: f64) -> Size {
        (**self).measure(max_width)
    }
}

impl<T: Measure + ?Sized> Measure for Box<T> {
    fn measure(&self, max_width: f64) -> Size {
        (**self).measure(max_width)
    }
}

impl<T: Measure + ?Sized> Measure for Rc<T> {
    fn measure(&self, max_width: f64) -> Size {
        (**self).measure(max_width)
    }
}

impl<T: Measure + ?Sized> Measure for Arc<T> {
    fn measure(&self, max_width: f64) -> Size {
        (**self).measure(max_width)
    }
}

/// Adapts a closure into a [`Measure`] implementation.
#[derive(Clone, Copy)]
pub struct MeasureFn<F>(pub F);

impl<F> Measure for MeasureFn<F>
where
    F: Fn(f64) -> Size,
{
    fn measure(&self, max_width: f64) -> Size {
        (self.0)(max_width)
    }
}

impl<F> std::fmt::Debug for MeasureFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("MeasureFn")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_measures_itself() {
        let size = Size::new(40.0, 20.0);
        assert_eq!(size.measure(10.0), size);
        assert_eq!((&size).measure(1000.0), size);
    }

    #[test]
    fn test_closure_measure() {
        // Fills the budget, capped at 80
        let item = MeasureFn(|max: f64| Size::new(max.min(80.0), 24.0));
        assert_eq!(item.measure(50.0), Size::new(50.0, 24.0));
        assert_eq!(item.measure(200.0), Size::new(80.0, 24.0));

        let boxed: Box<dyn Measure> = Box::new(item);
        assert_eq!(boxed.measure(60.0), Size::new(60.0, 24.0));
    }
}
