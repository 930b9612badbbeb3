//! Capability interface shared by checksum engines.

/// A resettable, incrementally fed checksum.
///
/// This is the seam adapters are written against: the streaming helpers in
/// [`crate::io`] drive any `Checksum`, and wrapping an implementation for a
/// foreign hashing framework only needs these three operations.
pub trait Checksum {
    /// Finalized value.
    type Output;

    /// Discards accumulated state and starts over from the initial value.
    fn reset(&mut self);

    /// Feeds the next chunk of input.
    fn update(&mut self, data: &[u8]);

    /// Returns the checksum of everything fed since the last reset.
    ///
    /// Must not disturb the running state.
    fn finalize(&self) -> Self::Output;
}

impl<C: Checksum + ?Sized> Checksum for &mut C {
    type Output = C::Output;

    fn reset(&mut self) {
        (**self).reset();
    }

    fn update(&mut self, data: &[u8]) {
        (**self).update(data);
    }

    fn finalize(&self) -> Self::Output {
        (**self).finalize()
    }
}

impl<C: Checksum + ?Sized> Checksum for Box<C> {
    type Output = C::Output;

    fn reset(&mut self) {
        (**self).reset();
    }

    fn update(&mut self, data: &[u8]) {
        (**self).update(data);
    }

    fn finalize(&self) -> Self::Output {
        (**self).finalize()
    }
}
