use std::cell::RefCell;
use std::rc::Rc;

/// A generator of uniform deviates.
///
/// This is the only capability a sampler needs from its randomness. Each
/// implementation documents whether the endpoints 0 and 1 can be produced.
///
/// Borrowed and shared handles are sources too, so a sampler can be bound to
/// a generator it does not own:
///
/// - `&mut S` for exclusive borrowing,
/// - `&RefCell<S>` and `Rc<RefCell<S>>` for sharing one generator between
///   several samplers on the same thread.
pub trait UniformSource {
    /// Produce the next uniform deviate, nominally in `(0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// Human-readable description of the generator.
    fn describe(&self) -> String;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<S: UniformSource + ?Sized> UniformSource for Box<S> {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

// Panics if the cell is already mutably borrowed, same as `RefCell::borrow_mut`.
impl<S: UniformSource + ?Sized> UniformSource for &RefCell<S> {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.borrow_mut().next_uniform()
    }

    fn describe(&self) -> String {
        self.borrow().describe()
    }
}

impl<S: UniformSource + ?Sized> UniformSource for Rc<RefCell<S>> {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.borrow_mut().next_uniform()
    }

    fn describe(&self) -> String {
        self.borrow().describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        draws: u32,
    }

    impl UniformSource for Counter {
        fn next_uniform(&mut self) -> f64 {
            self.draws += 1;
            0.5
        }

        fn describe(&self) -> String {
            format!("Counter({})", self.draws)
        }
    }

    #[test]
    fn mut_ref_forwards_to_target() {
        let mut counter = Counter { draws: 0 };
        {
            let handle = &mut counter;
            assert_eq!(handle.next_uniform(), 0.5);
            assert_eq!(handle.describe(), "Counter(1)");
        }
        assert_eq!(counter.draws, 1);
    }

    #[test]
    fn boxed_trait_object_is_a_source() {
        let mut boxed: Box<dyn UniformSource> = Box::new(Counter { draws: 0 });
        boxed.next_uniform();
        boxed.next_uniform();
        assert_eq!(boxed.describe(), "Counter(2)");
    }

    #[test]
    fn refcell_handles_share_state() {
        let cell = RefCell::new(Counter { draws: 0 });
        let mut a = &cell;
        let mut b = &cell;
        a.next_uniform();
        b.next_uniform();
        assert_eq!(cell.borrow().draws, 2);
    }

    #[test]
    fn rc_handles_share_state() {
        let shared = Rc::new(RefCell::new(Counter { draws: 0 }));
        let mut a = Rc::clone(&shared);
        let mut b = Rc::clone(&shared);
        a.next_uniform();
        b.next_uniform();
        b.next_uniform();
        assert_eq!(shared.describe(), "Counter(3)");
    }
}
