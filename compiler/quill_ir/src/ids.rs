//! Index and range types for the flat AST arena.
//!
//! All cross-node references are `u32` indices into [`Ast`] storage, and
//! node lists are (start, len) ranges into flattened side tables.
//!
//! [`Ast`]: crate::Ast

/// Index of an expression in the arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ExprId(u32);

impl ExprId {
    /// Create an id from a raw index.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        ExprId(raw)
    }

    /// Index into arena storage.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index of a statement in the arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct StmtId(u32);

impl StmtId {
    /// Create an id from a raw index.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        StmtId(raw)
    }

    /// Index into arena storage.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Range of expression ids in the arena's flattened expression lists.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ExprRange {
    pub start: u32,
    pub len: u16,
}

impl ExprRange {
    /// An empty range.
    pub const EMPTY: ExprRange = ExprRange { start: 0, len: 0 };

    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, len: u16) -> Self {
        ExprRange { start, len }
    }

    /// Number of expressions in the range.
    #[inline]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// Check if the range is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }
}

/// Range of statement ids in the arena's flattened statement lists.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct StmtRange {
    pub start: u32,
    pub len: u16,
}

impl StmtRange {
    /// An empty range.
    pub const EMPTY: StmtRange = StmtRange { start: 0, len: 0 };

    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, len: u16) -> Self {
        StmtRange { start, len }
    }

    /// Number of statements in the range.
    #[inline]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// Check if the range is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }
}

/// Range of parameters in the arena's parameter table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParamRange {
    pub start: u32,
    pub len: u16,
}

impl ParamRange {
    /// An empty range.
    pub const EMPTY: ParamRange = ParamRange { start: 0, len: 0 };

    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, len: u16) -> Self {
        ParamRange { start, len }
    }

    /// Number of parameters in the range.
    #[inline]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// Check if the range is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }
}
