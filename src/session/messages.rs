//! Message types for a plotting session

/// Input events, handled one at a time to completion
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Pointer click in client coordinates
    Click { client_x: f64, client_y: f64 },
    /// Submitted text of the `a`, `b`, `c` fields
    EditCoefficients([String; 3]),
    /// Repaint without changing state
    Redraw,
}

/// What handling a message did, beyond the repaint it always implies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// State unchanged, nothing repainted
    Nothing,
    /// Scene repainted
    Repainted,
    /// Scene repainted and the coefficient form changed
    FormUpdated,
}
