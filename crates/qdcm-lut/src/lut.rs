//! Dimension-erased lookup table.

use crate::{Lut1D, Lut3D, LutError, LutResult, Rgb};

/// A lookup table of either dimension.
///
/// CUBE files declare their dimensionality in the header, so parsing
/// yields this enum. Code that requires a specific dimension converts
/// with [`into_1d`](Lut::into_1d) or [`into_3d`](Lut::into_3d) and gets a
/// [`LutError::WrongDimension`] on mismatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Lut {
    /// A 1D per-channel curve.
    OneD(Lut1D),
    /// A 3D color cube.
    ThreeD(Lut3D),
}

impl Lut {
    /// Returns 1 or 3.
    pub fn dimension(&self) -> usize {
        match self {
            Lut::OneD(_) => 1,
            Lut::ThreeD(_) => 3,
        }
    }

    /// Returns the table size: entry count for 1D, edge size for 3D.
    pub fn size(&self) -> usize {
        match self {
            Lut::OneD(lut) => lut.size(),
            Lut::ThreeD(lut) => lut.size(),
        }
    }

    /// Returns the total number of stored entries (`size` for 1D,
    /// `size^3` for 3D).
    pub fn entry_count(&self) -> usize {
        match self {
            Lut::OneD(lut) => lut.size(),
            Lut::ThreeD(lut) => lut.size().pow(3),
        }
    }

    /// Looks up a grid entry by integer coordinates.
    ///
    /// For 1D tables this composes the per-channel curves, reading the
    /// red channel at `r`, green at `g` and blue at `b`.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is out of range for the table.
    pub fn get_entry(&self, r: usize, g: usize, b: usize) -> Rgb {
        match self {
            Lut::OneD(lut) => lut.get_entry(r, g, b),
            Lut::ThreeD(lut) => lut.get_entry(r, g, b),
        }
    }

    /// Applies the table to a color.
    pub fn apply(&self, rgb: Rgb) -> Rgb {
        match self {
            Lut::OneD(lut) => lut.apply(rgb),
            Lut::ThreeD(lut) => lut.apply(rgb),
        }
    }

    /// Borrows the 1D table, if this is one.
    pub fn as_1d(&self) -> Option<&Lut1D> {
        match self {
            Lut::OneD(lut) => Some(lut),
            Lut::ThreeD(_) => None,
        }
    }

    /// Borrows the 3D table, if this is one.
    pub fn as_3d(&self) -> Option<&Lut3D> {
        match self {
            Lut::OneD(_) => None,
            Lut::ThreeD(lut) => Some(lut),
        }
    }

    /// Converts into the 1D table.
    pub fn into_1d(self) -> LutResult<Lut1D> {
        match self {
            Lut::OneD(lut) => Ok(lut),
            Lut::ThreeD(_) => Err(LutError::WrongDimension {
                expected: 1,
                found: 3,
            }),
        }
    }

    /// Converts into the 3D table.
    pub fn into_3d(self) -> LutResult<Lut3D> {
        match self {
            Lut::ThreeD(lut) => Ok(lut),
            Lut::OneD(_) => Err(LutError::WrongDimension {
                expected: 3,
                found: 1,
            }),
        }
    }
}

impl From<Lut1D> for Lut {
    fn from(lut: Lut1D) -> Self {
        Lut::OneD(lut)
    }
}

impl From<Lut3D> for Lut {
    fn from(lut: Lut3D) -> Self {
        Lut::ThreeD(lut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_and_sizes() {
        let one: Lut = Lut1D::identity(33).unwrap().into();
        let three: Lut = Lut3D::identity(5).unwrap().into();
        assert_eq!(one.dimension(), 1);
        assert_eq!(three.dimension(), 3);
        assert_eq!(one.size(), 33);
        assert_eq!(three.size(), 5);
        assert_eq!(one.entry_count(), 33);
        assert_eq!(three.entry_count(), 125);
    }

    #[test]
    fn test_dispatch_matches_inner() {
        let inner = Lut3D::identity(9).unwrap();
        let lut = Lut::from(inner.clone());
        let probe = Rgb::new(0.2, 0.4, 0.8);
        assert_eq!(lut.apply(probe), inner.apply(probe));
        assert_eq!(lut.get_entry(1, 2, 3), inner.get_entry(1, 2, 3));
    }

    #[test]
    fn test_conversions() {
        let lut: Lut = Lut1D::identity(5).unwrap().into();
        assert!(lut.as_1d().is_some());
        assert!(lut.as_3d().is_none());
        assert!(matches!(
            lut.clone().into_3d(),
            Err(LutError::WrongDimension {
                expected: 3,
                found: 1
            })
        ));
        assert!(lut.into_1d().is_ok());
    }
}
