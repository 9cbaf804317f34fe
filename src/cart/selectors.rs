//! Pure derivations over a [`CartState`]. Nothing here is cached: every value
//! is recomputed from the lines, so totals cannot drift from the items.

use super::CartState;

/// Sum of quantities across all lines.
pub fn item_count(state: &CartState) -> u64 {
    state
        .items()
        .iter()
        .map(|line| u64::from(line.quantity))
        .sum()
}

/// Number of lines, regardless of quantity.
pub fn line_count(state: &CartState) -> usize {
    state.items().len()
}

/// Sum of `price * quantity`, at full precision. Round only when displaying.
pub fn subtotal(state: &CartState) -> f64 {
    // fold from +0.0: an empty float `sum()` may yield -0.0, which renders as "-0.00"
    state
        .items()
        .iter()
        .fold(0.0, |total, line| total + line.line_total())
}
