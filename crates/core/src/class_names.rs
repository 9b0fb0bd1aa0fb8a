//! Conditional class-name composition with utility-class conflict resolution.
//!
//! Components build their `class` attributes from several fragments: a base
//! set, state-dependent additions and caller overrides. [`cn!`] joins the
//! fragments and, when two utility classes target the same CSS property under
//! the same variant prefix (`dark:`, `hover:`, `md:` ...), keeps only the one
//! that came last.
//!
//! ```
//! use folio_core::cn;
//!
//! let active = true;
//! assert_eq!(cn!("px-4 py-2", "px-6"), "py-2 px-6");
//! assert_eq!(cn!("base", active.then_some("active"), None::<&str>), "base active");
//! assert_eq!(cn!(), "");
//! ```

use std::collections::HashSet;

/// Join class fragments into a single merged class string.
///
/// Accepts any mix of `&str`, `String` and `Option<_>` of those. `None`
/// fragments are skipped, so `condition.then_some("class")` is the idiomatic
/// way to add a class conditionally.
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($input:expr),+ $(,)?) => {{
        let mut classes = $crate::class_names::ClassNames::new();
        $( classes.add($input); )+
        classes.merge()
    }};
}

/// A value that can contribute class tokens to a [`ClassNames`] builder.
pub trait ClassInput {
    fn push_into(self, classes: &mut ClassNames);
}

impl ClassInput for &str {
    fn push_into(self, classes: &mut ClassNames) {
        classes.push_raw(self);
    }
}

impl ClassInput for String {
    fn push_into(self, classes: &mut ClassNames) {
        classes.push_raw(&self);
    }
}

impl ClassInput for &String {
    fn push_into(self, classes: &mut ClassNames) {
        classes.push_raw(self);
    }
}

impl<T: ClassInput> ClassInput for Option<T> {
    fn push_into(self, classes: &mut ClassNames) {
        if let Some(inner) = self {
            inner.push_into(classes);
        }
    }
}

/// Ordered collection of class tokens awaiting a merge.
#[derive(Debug, Default, Clone)]
pub struct ClassNames {
    tokens: Vec<String>,
}

impl ClassNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment (possibly absent).
    pub fn add(&mut self, input: impl ClassInput) -> &mut Self {
        input.push_into(self);
        self
    }

    fn push_raw(&mut self, raw: &str) {
        self.tokens
            .extend(raw.split_whitespace().map(str::to_owned));
    }

    /// Produce the final class string with conflicts resolved.
    pub fn merge(&self) -> String {
        merge_classes(&self.tokens)
    }
}

/// Resolve conflicts in an ordered token list; later tokens win.
///
/// Tokens are walked from the end. A recognised utility is kept only if no
/// later token already claimed its group (under the same variants); keeping
/// it also claims every narrower group it overrides (`p-*` claims `px-*`,
/// `pt-*` and so on). Unrecognised tokens are always kept.
pub fn merge_classes<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut claimed: HashSet<String> = HashSet::new();
    let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());

    for token in tokens.iter().rev() {
        let token = token.as_ref();
        let Some(key) = ConflictKey::parse(token) else {
            kept.push(token);
            continue;
        };

        if claimed.contains(&key.scoped(key.group)) {
            continue;
        }

        claimed.insert(key.scoped(key.group));
        for narrower in overridden_groups(key.group) {
            claimed.insert(key.scoped(narrower));
        }
        kept.push(token);
    }

    kept.reverse();
    kept.join(" ")
}

/// Variant scope plus utility group of a single class token.
struct ConflictKey {
    /// Sorted variant prefixes joined with `:`, plus `!` when important.
    scope: String,
    group: &'static str,
}

impl ConflictKey {
    fn parse(token: &str) -> Option<Self> {
        let mut parts: Vec<&str> = token.split(':').collect();
        let base = parts.pop()?;
        parts.sort_unstable();

        let (important, base) = match base.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, base),
        };
        let base = base.strip_prefix('-').unwrap_or(base);

        let group = class_group(base)?;
        let mut scope = parts.join(":");
        if important {
            scope.push('!');
        }
        Some(Self { scope, group })
    }

    fn scoped(&self, group: &str) -> String {
        format!("{}|{}", self.scope, group)
    }
}

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGNS: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const RADIUS_SIZES: &[&str] = &["none", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];
const RADIUS_SIDES: &[(&str, &str)] = &[
    ("t", "rounded-t"),
    ("r", "rounded-r"),
    ("b", "rounded-b"),
    ("l", "rounded-l"),
    ("s", "rounded-s"),
    ("e", "rounded-e"),
    ("tl", "rounded-tl"),
    ("tr", "rounded-tr"),
    ("br", "rounded-br"),
    ("bl", "rounded-bl"),
];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const BORDER_SIDES: &[(&str, &str)] = &[
    ("x", "border-w-x"),
    ("y", "border-w-y"),
    ("t", "border-w-t"),
    ("r", "border-w-r"),
    ("b", "border-w-b"),
    ("l", "border-w-l"),
];
const SHADOW_SIZES: &[&str] = &["sm", "md", "lg", "xl", "2xl", "inner", "none"];

/// Classes that are a whole utility on their own, keyed to their group.
const STANDALONE: &[(&str, &str)] = &[
    ("block", "display"),
    ("inline-block", "display"),
    ("inline", "display"),
    ("flex", "display"),
    ("inline-flex", "display"),
    ("grid", "display"),
    ("inline-grid", "display"),
    ("hidden", "display"),
    ("contents", "display"),
    ("flow-root", "display"),
    ("table", "display"),
    ("list-item", "display"),
    ("static", "position"),
    ("fixed", "position"),
    ("absolute", "position"),
    ("relative", "position"),
    ("sticky", "position"),
    ("visible", "visibility"),
    ("invisible", "visibility"),
    ("underline", "text-decoration"),
    ("overline", "text-decoration"),
    ("line-through", "text-decoration"),
    ("no-underline", "text-decoration"),
    ("uppercase", "text-transform"),
    ("lowercase", "text-transform"),
    ("capitalize", "text-transform"),
    ("normal-case", "text-transform"),
    ("italic", "font-style"),
    ("not-italic", "font-style"),
    ("border", "border-w"),
    ("rounded", "rounded"),
    ("shadow", "shadow"),
    ("outline", "outline-style"),
    ("transition", "transition"),
    ("grow", "grow"),
    ("shrink", "shrink"),
];

/// Prefix utilities whose value never changes the group, longest first.
const PREFIXED: &[(&str, &str)] = &[
    ("underline-offset-", "underline-offset"),
    ("outline-offset-", "outline-offset"),
    ("backdrop-blur-", "backdrop-blur"),
    ("line-clamp-", "line-clamp"),
    ("translate-x-", "translate-x"),
    ("translate-y-", "translate-y"),
    ("grid-cols-", "grid-cols"),
    ("grid-rows-", "grid-rows"),
    ("overflow-x-", "overflow-x"),
    ("overflow-y-", "overflow-y"),
    ("col-span-", "col-span"),
    ("space-x-", "space-x"),
    ("space-y-", "space-y"),
    ("overflow-", "overflow"),
    ("duration-", "duration"),
    ("tracking-", "tracking"),
    ("leading-", "leading"),
    ("opacity-", "opacity"),
    ("justify-", "justify"),
    ("gap-x-", "gap-x"),
    ("gap-y-", "gap-y"),
    ("min-w-", "min-w"),
    ("min-h-", "min-h"),
    ("max-w-", "max-w"),
    ("max-h-", "max-h"),
    ("bottom-", "bottom"),
    ("inset-", "inset"),
    ("items-", "items"),
    ("right-", "right"),
    ("scale-", "scale"),
    ("delay-", "delay"),
    ("self-", "self"),
    ("size-", "size"),
    ("left-", "left"),
    ("ease-", "ease"),
    ("blur-", "blur"),
    ("gap-", "gap"),
    ("top-", "top"),
    ("bg-", "bg"),
    ("px-", "px"),
    ("py-", "py"),
    ("pt-", "pt"),
    ("pr-", "pr"),
    ("pb-", "pb"),
    ("pl-", "pl"),
    ("ps-", "ps"),
    ("pe-", "pe"),
    ("mx-", "mx"),
    ("my-", "my"),
    ("mt-", "mt"),
    ("mr-", "mr"),
    ("mb-", "mb"),
    ("ml-", "ml"),
    ("ms-", "ms"),
    ("me-", "me"),
    ("z-", "z"),
    ("w-", "w"),
    ("h-", "h"),
    ("p-", "p"),
    ("m-", "m"),
];

/// Classify a variant-free, sign-free class into its conflict group.
fn class_group(base: &str) -> Option<&'static str> {
    if let Some(&(_, group)) = STANDALONE.iter().find(|(name, _)| *name == base) {
        return Some(group);
    }

    if let Some(value) = base.strip_prefix("text-") {
        return Some(if FONT_SIZES.contains(&value) {
            "font-size"
        } else if TEXT_ALIGNS.contains(&value) {
            "text-align"
        } else {
            "text-color"
        });
    }

    if let Some(value) = base.strip_prefix("font-") {
        return Some(if FONT_WEIGHTS.contains(&value) {
            "font-weight"
        } else {
            "font-family"
        });
    }

    if let Some(value) = base.strip_prefix("flex-") {
        return Some(match value {
            "row" | "row-reverse" | "col" | "col-reverse" => "flex-direction",
            "wrap" | "wrap-reverse" | "nowrap" => "flex-wrap",
            _ => "flex",
        });
    }

    if let Some(value) = base.strip_prefix("rounded-") {
        if RADIUS_SIZES.contains(&value) || value.starts_with('[') {
            return Some("rounded");
        }
        let side = value.split('-').next().unwrap_or(value);
        return RADIUS_SIDES
            .iter()
            .find(|(name, _)| *name == side)
            .map(|&(_, group)| group);
    }

    if let Some(value) = base.strip_prefix("border-") {
        return Some(border_group(value));
    }

    if let Some(value) = base.strip_prefix("shadow-") {
        return Some(if SHADOW_SIZES.contains(&value) {
            "shadow"
        } else {
            "shadow-color"
        });
    }

    if let Some(value) = base.strip_prefix("outline-") {
        return Some(if value.starts_with("offset-") {
            "outline-offset"
        } else if is_numeric(value) {
            "outline-w"
        } else if matches!(value, "none" | "dashed" | "dotted" | "double") {
            "outline-style"
        } else {
            "outline-color"
        });
    }

    if base.starts_with("transition-") {
        return Some("transition");
    }

    PREFIXED
        .iter()
        .find(|(prefix, _)| base.starts_with(prefix))
        .map(|&(_, group)| group)
}

fn border_group(value: &str) -> &'static str {
    if is_numeric(value) {
        return "border-w";
    }
    if BORDER_STYLES.contains(&value) {
        return "border-style";
    }

    let (side, rest) = value.split_once('-').unwrap_or((value, ""));
    if let Some(&(_, group)) = BORDER_SIDES.iter().find(|(name, _)| *name == side) {
        if rest.is_empty() || is_numeric(rest) {
            return group;
        }
    }

    "border-color"
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Narrower groups that a broader utility overrides when it comes later.
fn overridden_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"],
        "px" => &["pr", "pl", "ps", "pe"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml", "ms", "me"],
        "mx" => &["mr", "ml", "ms", "me"],
        "my" => &["mt", "mb"],
        "gap" => &["gap-x", "gap-y"],
        "size" => &["w", "h"],
        "inset" => &["top", "right", "bottom", "left"],
        "overflow" => &["overflow-x", "overflow-y"],
        "rounded" => &[
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-s",
            "rounded-e",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "border-w" => &[
            "border-w-x",
            "border-w-y",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use crate::cn;

    use super::*;

    #[test]
    fn joins_unrelated_classes() {
        assert_eq!(cn!("text-sm", "font-bold"), "text-sm font-bold");
    }

    #[test]
    fn conditional_inputs() {
        let is_active = true;
        let is_disabled = false;
        let merged = cn!(
            "base",
            is_active.then_some("active"),
            is_disabled.then_some("disabled")
        );
        assert_eq!(merged, "base active");
    }

    #[test]
    fn later_text_color_wins() {
        assert_eq!(cn!("text-red-500", "text-blue-500"), "text-blue-500");
    }

    #[test]
    fn empty_call() {
        assert_eq!(cn!(), "");
    }

    #[test]
    fn absent_inputs_skipped() {
        assert_eq!(cn!("base", None::<&str>, None::<String>, "extra"), "base extra");
    }

    #[test]
    fn padding_axis_override_keeps_position_of_winner() {
        assert_eq!(cn!("px-4 py-2", "px-6"), "py-2 px-6");
    }

    #[test]
    fn broad_padding_overrides_axes() {
        assert_eq!(cn!("px-4 py-2", "p-3"), "p-3");
    }

    #[test]
    fn axis_padding_refines_broad_padding() {
        assert_eq!(cn!("p-3", "px-4"), "p-3 px-4");
    }

    #[test]
    fn size_and_color_do_not_conflict() {
        assert_eq!(cn!("text-sm text-red-500"), "text-sm text-red-500");
    }

    #[test]
    fn variants_scope_conflicts() {
        assert_eq!(
            cn!("text-surface-600 dark:text-surface-400", "dark:text-surface-50"),
            "text-surface-600 dark:text-surface-50"
        );
    }

    #[test]
    fn variant_order_is_irrelevant() {
        assert_eq!(
            cn!("dark:hover:bg-surface-800", "hover:dark:bg-surface-700"),
            "hover:dark:bg-surface-700"
        );
    }

    #[test]
    fn display_utilities_conflict() {
        assert_eq!(cn!("h-5 w-5 block", "hidden"), "h-5 w-5 hidden");
    }

    #[test]
    fn margin_left_override_from_caller() {
        assert_eq!(cn!("inline-flex ml-0", Some("ml-2")), "inline-flex ml-2");
    }

    #[test]
    fn border_width_and_color_are_separate() {
        assert_eq!(
            cn!("border border-surface-200", "border-dashed"),
            "border border-surface-200 border-dashed"
        );
        assert_eq!(cn!("border-t", "border-surface-800"), "border-t border-surface-800");
    }

    #[test]
    fn rounded_sizes_conflict() {
        assert_eq!(cn!("rounded-lg", "rounded-xl"), "rounded-xl");
    }

    #[test]
    fn unknown_classes_are_kept() {
        assert_eq!(cn!("group prose", "group"), "group prose group");
    }

    #[test]
    fn owned_strings_accepted() {
        let extra = String::from("mt-4");
        assert_eq!(cn!("mt-2", &extra, String::from("mb-1")), "mt-4 mb-1");
    }

    #[test]
    fn important_modifier_scopes_separately() {
        assert_eq!(cn!("!p-2", "p-4"), "!p-2 p-4");
    }

    #[test]
    fn outline_offset_width_and_color_are_separate() {
        assert_eq!(
            cn!("outline-2 outline-offset-2 outline-accent-500", "outline-offset-4"),
            "outline-2 outline-accent-500 outline-offset-4"
        );
    }
}
