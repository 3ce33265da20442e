use vw_core::Coordinate;

/// Pure destination-to-source mapping.
///
/// Implemented by the parameter structs in this crate and by any
/// `Fn(Coordinate) -> Coordinate` closure that is `Send + Sync`.
pub trait WarpFn: Send + Sync {
    fn warp(&self, dst: Coordinate) -> Coordinate;
}

impl<F> WarpFn for F
where
    F: Fn(Coordinate) -> Coordinate + Send + Sync,
{
    fn warp(&self, dst: Coordinate) -> Coordinate {
        self(dst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Identity;

impl WarpFn for Identity {
    fn warp(&self, dst: Coordinate) -> Coordinate {
        dst
    }
}
