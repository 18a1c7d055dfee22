/// Number of columns in a grid.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Width(pub usize);

/// Number of rows in a grid.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Height(pub usize);

impl Width {
    #[inline]
    pub fn is_odd(self) -> bool {
        self.0 % 2 == 1
    }

    /// Bump an even width up to the next odd value so the room lattice lines up.
    #[inline]
    pub fn to_odd(self) -> Width {
        Width(next_odd(self.0))
    }
}

impl Height {
    #[inline]
    pub fn is_odd(self) -> bool {
        self.0 % 2 == 1
    }

    #[inline]
    pub fn to_odd(self) -> Height {
        Height(next_odd(self.0))
    }
}

fn next_odd(n: usize) -> usize {
    if n % 2 == 0 { n + 1 } else { n }
}
