//! The single gate deciding whether a reading may be used.

/// A value is valid when it is present, not empty, and a finite number.
pub trait Validity {
    fn is_valid(&self) -> bool;
}

impl Validity for str {
    fn is_valid(&self) -> bool {
        !self.is_empty()
    }
}

impl Validity for String {
    fn is_valid(&self) -> bool {
        self.as_str().is_valid()
    }
}

impl Validity for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl<T: Validity + ?Sized> Validity for &T {
    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }
}

impl<T: Validity> Validity for Option<T> {
    fn is_valid(&self) -> bool {
        self.as_ref().is_some_and(Validity::is_valid)
    }
}

/// Free-function form of [`Validity::is_valid`], handy in `filter` chains.
pub fn is_valid<T: Validity + ?Sized>(value: &T) -> bool {
    value.is_valid()
}
