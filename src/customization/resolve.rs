//! Deep Merge Resolver.
//!
//! Reconciles a sparse override against a complete base, one schema level
//! at a time. The schema is fixed, so the recursion is written out per
//! group rather than walking arbitrary JSON: there are no arrays to merge
//! and `null` in input JSON is the same as an absent field.

use super::types::{
    Branding, Colors, Customization, Layout, PartialCustomization, Sections, Smart, ThemeInfo,
    Typography, Visual, merge_nested,
};

/// Resolve `custom` against `defaults`.
///
/// Every leaf of `defaults` is present in the result. A leaf present in
/// `custom` wins; an absent one keeps the default. Values are never
/// validated or clamped, so out-of-range numbers and malformed colour
/// strings pass straight through.
pub fn resolve(defaults: &Customization, custom: &PartialCustomization) -> Customization {
    Customization {
        colors: merge_nested(&defaults.colors, &custom.colors, Colors::merged),
        typography: merge_nested(&defaults.typography, &custom.typography, Typography::merged),
        layout: merge_nested(&defaults.layout, &custom.layout, Layout::merged),
        visual: merge_nested(&defaults.visual, &custom.visual, Visual::merged),
        sections: merge_nested(&defaults.sections, &custom.sections, Sections::merged),
        branding: merge_nested(&defaults.branding, &custom.branding, Branding::merged),
        smart: merge_nested(&defaults.smart, &custom.smart, Smart::merged),
        theme: merge_nested(&defaults.theme, &custom.theme, ThemeInfo::merged),
    }
}

/// Resolve `custom` against the Default Customization Table.
pub fn resolve_with_defaults(custom: &PartialCustomization) -> Customization {
    resolve(&super::default_customization(), custom)
}
