use serde::Serialize;

/// A single entry of a selection-control option list.
///
/// Every status table exposes an `options()` derivation with the same
/// code/label pairing as the table itself, in declaration order. The
/// console's selection widgets are populated from these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: u32,
    pub label: &'static str,
}
