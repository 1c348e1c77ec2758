/// Build a `RuleDef` catalog entry in a `const` context.
#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        pattern: $pattern:expr,
        replace: $replace:expr
        $(, flags: $flags:expr)?
        $(,)?
    ) => {
        $crate::RuleDef {
            name: $name,
            pattern: $pattern,
            replacement: $replace,
            flags: { $crate::RuleFlags::empty() $(.union($flags))? },
        }
    };
}
