//! Text shaping and line breaking (parley), reduced to what the sweep needs.

/// Font loading and block layout.
pub mod text;
