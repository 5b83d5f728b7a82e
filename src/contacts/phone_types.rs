//! Static phone-type reference data for presentation layers

use serde::Serialize;

/// Display metadata for a phone category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneType {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

pub const PHONE_TYPES: &[PhoneType] = &[
    PhoneType {
        label: "Home",
        value: "home",
        icon: "pi-home",
    },
    PhoneType {
        label: "Mobile",
        value: "mobile",
        icon: "pi-mobile",
    },
    PhoneType {
        label: "Office",
        value: "office",
        icon: "pi-building",
    },
];

/// Look up a phone type by its category key
pub fn phone_type(value: &str) -> Option<&'static PhoneType> {
    PHONE_TYPES.iter().find(|pt| pt.value == value)
}
