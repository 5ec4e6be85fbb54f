//! File round-trip tests for the .cube reader and writer.
//!
//! Parsing itself is covered by unit tests; these go through the
//! filesystem to exercise the path-taking API and its error paths.

use qdcm_lut::{cube, Lut, Lut1D, Lut3D, LutError, Rgb};
use tempfile::tempdir;

#[test]
fn test_3d_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("identity.cube");
    let lut = Lut3D::identity(17).unwrap();

    cube::write_3d(&path, &lut).unwrap();
    let loaded = cube::read_3d(&path).unwrap();
    assert_eq!(loaded, lut);

    // The generic reader sees the same table.
    let generic = cube::read(&path).unwrap();
    assert_eq!(generic.into_3d().unwrap(), lut);
}

#[test]
fn test_1d_file_round_trip() {
    // Steps of 1/64 stay exact across the six-decimal writer.
    let dir = tempdir().unwrap();
    let path = dir.path().join("curve.cube");
    let lut = Lut1D::identity(65).unwrap();

    cube::write_1d(&path, &lut).unwrap();
    let loaded = cube::read_1d(&path).unwrap();
    assert_eq!(loaded, lut);
}

#[test]
fn test_generic_write_dispatches_on_dimension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("either.cube");

    let lut: Lut = Lut3D::identity(5).unwrap().into();
    cube::write(&path, &lut).unwrap();
    assert_eq!(cube::read(&path).unwrap(), lut);

    let lut: Lut = Lut1D::identity(5).unwrap().into();
    cube::write(&path, &lut).unwrap();
    assert_eq!(cube::read(&path).unwrap(), lut);
}

#[test]
fn test_read_1d_rejects_3d_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cube3d.cube");
    cube::write_3d(&path, &Lut3D::identity(2).unwrap()).unwrap();

    let err = cube::read_1d(&path).unwrap_err();
    assert!(matches!(
        err,
        LutError::WrongDimension {
            expected: 1,
            found: 3,
        }
    ));
}

#[test]
fn test_read_3d_rejects_1d_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("curve.cube");
    cube::write_1d(&path, &Lut1D::identity(16).unwrap()).unwrap();

    let err = cube::read_3d(&path).unwrap_err();
    assert!(matches!(
        err,
        LutError::WrongDimension {
            expected: 3,
            found: 1,
        }
    ));
}

#[test]
fn test_write_3d_rejects_oversize_cube() {
    // 257 is a valid in-memory size but not a valid file size; the check
    // fires before the file is created.
    let dir = tempdir().unwrap();
    let path = dir.path().join("oversize.cube");
    let lut = Lut3D::identity(257).unwrap();

    let err = cube::write_3d(&path, &lut).unwrap_err();
    assert!(matches!(
        err,
        LutError::SizeOutOfRange {
            size: 257,
            min: 2,
            max: 256,
        }
    ));
    assert!(!path.exists());
}

#[test]
fn test_read_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = cube::read(dir.path().join("absent.cube")).unwrap_err();
    assert!(err.is_io_error());
}

#[test]
fn test_written_values_survive_quantization() {
    // The writer emits six decimals; a gamma-like curve must come back
    // within that precision.
    let dir = tempdir().unwrap();
    let path = dir.path().join("gamma.cube");
    let entries: Vec<Rgb> = (0..33)
        .map(|i| Rgb::splat((i as f32 / 32.0).powf(2.2)))
        .collect();
    let lut = Lut1D::from_entries(entries).unwrap();

    cube::write_1d(&path, &lut).unwrap();
    let loaded = cube::read_1d(&path).unwrap();
    assert_eq!(loaded.size(), lut.size());
    for (a, b) in loaded.entries().iter().zip(lut.entries()) {
        assert!((a.r - b.r).abs() < 1e-6);
        assert!((a.g - b.g).abs() < 1e-6);
        assert!((a.b - b.b).abs() < 1e-6);
    }
}
