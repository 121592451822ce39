/// Runtime values and their display forms.
///
/// Defines the `Value` enum produced by evaluation, its truthiness rules and
/// the text rendering used by `show` and by text concatenation.
pub mod core;
